//! Send page - pick a contact and an amount, confirm in a bottom sheet.

use dioxus::prelude::*;
use pocketpay_core::WorkerMessage;
use pocketpay_ui::{BottomSheet, Button, ButtonVariant, SegmentedControl, TextField};

use super::activity::format_money;
use crate::context::use_app;

const CONTACTS: [&str; 4] = ["Ana Ruiz", "Jon Park", "Mia Chen", "Leo Grant"];
const MODES: [&str; 2] = ["Send", "Request"];

/// Parse a user-typed amount like `20`, `20.5` or `$1,020.50` into cents.
fn parse_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    let cents = whole.checked_mul(100)?.checked_add(frac)?;
    (cents > 0).then_some(cents)
}

#[component]
pub fn SendMoney() -> Element {
    let app = use_app();

    let mut mode = use_signal(|| 0usize);
    let mut contact = use_signal(|| 0usize);
    let mut amount = use_signal(String::new);
    let mut amount_error = use_signal(|| None::<String>);
    let mut confirming = use_signal(|| None::<u64>);

    let review = move |_: ()| match parse_amount(&amount()) {
        Some(cents) => {
            amount_error.set(None);
            confirming.set(Some(cents));
        }
        None => amount_error.set(Some("Enter an amount greater than zero".to_string())),
    };

    let confirm = {
        let notifier = app.notifier.clone();
        move |_: ()| {
            let Some(cents) = confirming() else {
                return;
            };
            let who = CONTACTS[contact()];
            let (title, body) = if mode() == 0 {
                ("Payment sent", format!("{} to {}", format_money(cents), who))
            } else {
                ("Request sent", format!("Asked {} for {}", who, format_money(cents)))
            };
            tracing::info!(%title, "transfer confirmed");
            let message = WorkerMessage::ShowNotification {
                title: title.to_string(),
                body,
            };
            if let Err(e) = notifier.handle(message) {
                tracing::warn!("Could not show confirmation: {}", e);
            }
            confirming.set(None);
            amount.set(String::new());
        }
    };

    let verb = MODES[mode().min(MODES.len() - 1)];
    let summary = confirming()
        .map(|cents| format!("{} {} · {}", verb, format_money(cents), CONTACTS[contact()]))
        .unwrap_or_default();

    rsx! {
        section { class: "send",
            h1 { class: "page-title", "Move money" }

            SegmentedControl {
                options: MODES.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
                selected: mode(),
                on_select: move |i| mode.set(i),
                aria_label: "Transfer type".to_string(),
            }

            h2 { class: "section-header", "To" }
            ul { class: "contact-list", role: "listbox", "aria-label": "Contacts",
                for (i, name) in CONTACTS.iter().enumerate() {
                    li {
                        key: "{name}",
                        class: if i == contact() { "contact selected" } else { "contact" },
                        role: "option",
                        "aria-selected": if i == contact() { "true" } else { "false" },
                        onclick: move |_| contact.set(i),
                        "{name}"
                    }
                }
            }

            TextField {
                id: "amount".to_string(),
                label: "Amount".to_string(),
                input_type: "text".to_string(),
                placeholder: "$0.00".to_string(),
                value: amount(),
                oninput: move |s| amount.set(s),
                error: amount_error(),
            }

            Button { full_width: true, onclick: review, "Review" }

            BottomSheet {
                open: confirming().is_some(),
                on_dismiss: move |_| confirming.set(None),
                title: "Confirm".to_string(),
                config: app.config.sheet.clone(),
                p { class: "sheet-summary", "{summary}" }
                Button { full_width: true, onclick: confirm, "Confirm" }
                Button {
                    variant: ButtonVariant::Ghost,
                    full_width: true,
                    onclick: move |_| confirming.set(None),
                    "Cancel"
                }
            }
        }
    }
}
