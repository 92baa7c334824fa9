//! Home page - balance card, quick actions and the latest activity.

use dioxus::prelude::*;
use pocketpay_ui::{Button, ButtonVariant, TiltCard};

use super::activity::{format_money, TransactionRow, TRANSACTIONS};
use crate::app::Route;
use crate::context::use_app;

const BALANCE_CENTS: u64 = 124_050;
const CARD_LAST_DIGITS: &str = "4821";

#[component]
pub fn Home() -> Element {
    let app = use_app();
    let navigator = use_navigator();
    let remembered = use_hook({
        let app = app.clone();
        move || {
            app.storage
                .as_ref()
                .and_then(|s| s.load_remembered_or_default())
        }
    });
    let greeting = match &remembered {
        Some(login) => format!("Hi, {}", login.email.split('@').next().unwrap_or("there")),
        None => "Hi there".to_string(),
    };

    rsx! {
        section { class: "home",
            h1 { class: "page-title", "{greeting}" }

            TiltCard { config: app.config.tilt.clone(), class: "balance-card".to_string(),
                span { class: "balance-label", "Available balance" }
                span { class: "balance-amount", "{format_money(BALANCE_CENTS)}" }
                span { class: "balance-card-number", "•••• {CARD_LAST_DIGITS}" }
            }

            div { class: "quick-actions",
                Button { onclick: move |_| { navigator.push(Route::SendMoney {}); }, "Send" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { navigator.push(Route::Activity {}); },
                    "Activity"
                }
            }

            h2 { class: "section-header", "Recent" }
            ul { class: "tx-list",
                for tx in TRANSACTIONS.iter().take(3) {
                    TransactionRow { key: "{tx.at}", tx: tx.clone() }
                }
            }
        }
    }
}
