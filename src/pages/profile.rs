//! Profile page - saved login, reminders and locking the wallet.

use chrono::DateTime;
use dioxus::prelude::*;
use pocketpay_core::{SavedLogin, WorkerMessage};
use pocketpay_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_app;

/// Delay of the demo reminder
const REMINDER_DELAY_MS: u64 = 5_000;

/// Build the worker message for a delayed reminder, in the same JSON shape
/// a page would post to the worker.
fn reminder_message(delay_ms: u64) -> pocketpay_core::WalletResult<WorkerMessage> {
    let raw = serde_json::json!({
        "type": "SCHEDULE_NOTIFICATION",
        "title": "Bill reminder",
        "body": "Your electricity bill is due tomorrow.",
        "delay": delay_ms,
    });
    WorkerMessage::from_json(&raw.to_string())
}

fn saved_since(login: &SavedLogin) -> String {
    DateTime::from_timestamp_millis(login.saved_at)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn Profile() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let mut saved = use_signal({
        let app = app.clone();
        move || {
            app.storage
                .as_ref()
                .and_then(|s| s.load_remembered_or_default())
        }
    });
    let mut status = use_signal(|| None::<String>);

    let forget = {
        let app = app.clone();
        move |_: ()| {
            let Some(storage) = &app.storage else {
                return;
            };
            match storage.clear_remembered() {
                Ok(()) => {
                    saved.set(None);
                    status.set(Some("Saved login removed".to_string()));
                }
                Err(e) => {
                    tracing::warn!("Failed to clear remembered login: {}", e);
                    status.set(Some("Could not remove saved login".to_string()));
                }
            }
        }
    };

    let remind = {
        let notifier = app.notifier.clone();
        move |_: ()| {
            let result = reminder_message(REMINDER_DELAY_MS).and_then(|m| notifier.handle(m));
            match result {
                Ok(()) => status.set(Some("Reminder scheduled in 5 seconds".to_string())),
                Err(e) => {
                    tracing::warn!("Failed to schedule reminder: {}", e);
                    status.set(Some("Could not schedule reminder".to_string()));
                }
            }
        }
    };

    let lock = {
        let session = app.session.clone();
        move |_: ()| {
            session.set_pin_validated(false);
            tracing::info!("wallet locked");
            navigator.replace(Route::Pin {});
        }
    };

    rsx! {
        section { class: "profile",
            h1 { class: "page-title", "Profile" }

            div { class: "profile-card",
                h2 { class: "section-header", "Saved login" }
                if let Some(login) = saved() {
                    p { class: "body-text", "{login.email}" }
                    p { class: "body-text muted", "Remembered since {saved_since(&login)}" }
                    Button { variant: ButtonVariant::Secondary, onclick: forget, "Forget this device" }
                } else if app.storage.is_none() {
                    p { class: "body-text muted", "Storage is unavailable on this device." }
                } else {
                    p { class: "body-text muted", "No login is remembered." }
                }
            }

            div { class: "profile-card",
                h2 { class: "section-header", "Notifications" }
                Button { variant: ButtonVariant::Secondary, onclick: remind, "Send a test reminder" }
            }

            if let Some(message) = status() {
                p { class: "profile-status", role: "status", "{message}" }
            }

            Button { variant: ButtonVariant::Danger, full_width: true, onclick: lock, "Lock wallet" }
        }
    }
}
