//! PIN lock screen.
//!
//! Four digits from the keypad or the keyboard. A correct PIN marks the
//! session as unlocked and replaces this page with the sign-in page.

use dioxus::prelude::*;
use pocketpay_core::{BiometricStub, PinOutcome, PinPad, PIN_LENGTH};
use pocketpay_ui::{keypad_key, Keypad, PinDots};

use crate::app::Route;
use crate::context::use_app;

#[component]
pub fn Pin() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let mut pad = use_signal(PinPad::new);
    let mut error = use_signal(|| None::<String>);
    let mut verifying = use_signal(|| false);

    let expected = app.config.auth.expected_pin.clone();
    let session = app.session.clone();
    let press = use_callback(move |digit: char| {
        if !pad.write().press(digit) {
            return;
        }
        error.set(None);
        if !pad.peek().is_complete() {
            return;
        }
        let outcome = pad.write().submit(&expected);
        match outcome {
            PinOutcome::Accepted => {
                tracing::info!("PIN accepted");
                session.set_pin_validated(true);
                navigator.replace(Route::Login {});
            }
            PinOutcome::Rejected { attempts } => {
                error.set(Some(format!("Incorrect PIN ({} failed)", attempts)));
            }
            PinOutcome::Incomplete => {}
        }
    });

    let session = app.session.clone();
    let biometric = move |_: ()| {
        if verifying() {
            return;
        }
        verifying.set(true);
        let session = session.clone();
        spawn(async move {
            if BiometricStub::default().authenticate().await.is_ok() {
                session.set_pin_validated(true);
                navigator.replace(Route::Login {});
            }
            verifying.set(false);
        });
    };

    let entered = pad.read().entered();

    rsx! {
        main {
            class: "pin-screen",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                match keypad_key(&e.key().to_string()) {
                    Some(Some(digit)) => press.call(digit),
                    Some(None) => pad.write().backspace(),
                    None => {}
                }
            },

            h1 { class: "page-title", "Enter your PIN" }
            PinDots { filled: entered, length: PIN_LENGTH, error: error().is_some() }
            if let Some(message) = error() {
                p { class: "field-error", role: "alert", "{message}" }
            }
            if verifying() {
                p { class: "body-text muted", "Checking Face ID…" }
            }

            Keypad {
                on_digit: move |digit| press.call(digit),
                on_backspace: move |_| pad.write().backspace(),
                on_biometric: biometric,
                disabled: verifying(),
            }
        }
    }
}
