//! Sign-in page.
//!
//! Field errors come from [`LoginForm::validate`] and are shown inline; a
//! rejected sign-in only ever shows the single generic message. "Remember
//! me" stores the email (never the password) for the next launch.

use dioxus::prelude::*;
use pocketpay_core::{
    Authenticator, BiometricStub, Credentials, LoginErrors, LoginForm, SavedLogin,
    SimulatedAuthenticator,
};
use pocketpay_ui::{Button, ButtonVariant, Checkbox, TextField};

use crate::app::Route;
use crate::context::{use_app, AppContext};

#[component]
pub fn Login() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let remembered = use_hook({
        let app = app.clone();
        move || {
            app.storage
                .as_ref()
                .and_then(|storage| storage.load_remembered_or_default())
        }
    });

    let mut email = use_signal({
        let remembered = remembered.clone();
        move || remembered.map(|l| l.email).unwrap_or_default()
    });
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| remembered.is_some());
    let mut errors = use_signal(LoginErrors::default);
    let mut auth_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // The lock screen comes first.
    let unlocked = app.session.pin_validated();
    use_effect(move || {
        if !unlocked {
            navigator.replace(Route::Pin {});
        }
    });

    let on_submit = {
        let app = app.clone();
        move |e: FormEvent| {
            e.prevent_default();
            if busy() {
                return;
            }
            auth_error.set(None);
            let form = LoginForm {
                email: email(),
                password: password(),
                remember: remember(),
            };
            let submitted = form.submit(|credentials| {
                busy.set(true);
                let app = app.clone();
                spawn(async move {
                    let authenticator = SimulatedAuthenticator::new(&app.config.auth);
                    match authenticator.authenticate(&credentials).await {
                        Ok(()) => {
                            persist_remembered(&app, &credentials);
                            navigator.replace(Route::Home {});
                        }
                        Err(e) => {
                            password.set(String::new());
                            auth_error.set(Some(e.to_string()));
                        }
                    }
                    busy.set(false);
                });
            });
            match submitted {
                Ok(()) => errors.set(LoginErrors::default()),
                Err(field_errors) => errors.set(field_errors),
            }
        }
    };

    let face_id = move |_: ()| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            if BiometricStub::default().authenticate().await.is_ok() {
                navigator.replace(Route::Home {});
            }
            busy.set(false);
        });
    };

    let field_errors = errors();

    rsx! {
        main { class: "login",
            header { class: "login-header",
                h1 { class: "page-title", "Welcome back" }
                p { class: "body-text muted", "Sign in to your wallet" }
            }

            form { class: "login-form", novalidate: true, onsubmit: on_submit,
                TextField {
                    id: "email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    autocomplete: "email".to_string(),
                    value: email(),
                    oninput: move |s| email.set(s),
                    error: field_errors.email.as_ref().map(|e| e.to_string()),
                    disabled: busy(),
                }
                TextField {
                    id: "password".to_string(),
                    label: "Password".to_string(),
                    input_type: "password".to_string(),
                    autocomplete: "current-password".to_string(),
                    value: password(),
                    oninput: move |s| password.set(s),
                    error: field_errors.password.as_ref().map(|e| e.to_string()),
                    disabled: busy(),
                }
                Checkbox {
                    id: "remember".to_string(),
                    label: "Remember me".to_string(),
                    checked: remember(),
                    onchange: move |checked| remember.set(checked),
                }

                if let Some(message) = auth_error() {
                    p { class: "form-error", role: "alert", "{message}" }
                }

                Button {
                    button_type: "submit".to_string(),
                    full_width: true,
                    loading: busy(),
                    "Sign in"
                }
            }

            div { class: "login-alt",
                Button {
                    variant: ButtonVariant::Secondary,
                    full_width: true,
                    disabled: busy(),
                    onclick: face_id,
                    "Sign in with Face ID"
                }
            }
        }
    }
}

/// Save or forget the remembered email after a successful sign-in.
fn persist_remembered(app: &AppContext, credentials: &Credentials) {
    let Some(storage) = &app.storage else {
        return;
    };
    let result = if credentials.remember {
        storage.save_remembered(&SavedLogin::new(credentials.email.clone()))
    } else {
        storage.clear_remembered()
    };
    if let Err(e) = result {
        tracing::warn!("Failed to update remembered login: {}", e);
    }
}
