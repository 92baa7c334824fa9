use dioxus::prelude::*;
use pocketpay_core::NotificationSpec;
use pocketpay_ui::NotificationToast;

use crate::components::{MobileNav, Tab};
use crate::context::{get_data_dir, get_wallet_config, use_app, AppContext};
use crate::pages::{Activity, Home, Login, Onboarding, Pin, Profile, SendMoney};
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Onboarding carousel
/// - `/pin` - PIN lock screen
/// - `/login` - Email sign-in (requires the PIN)
/// - `/home`, `/send`, `/activity`, `/profile` - Signed-in tabs
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Onboarding {},
    #[route("/pin")]
    Pin {},
    #[route("/login")]
    Login {},
    #[layout(TabLayout)]
        #[route("/home")]
        Home {},
        #[route("/send")]
        SendMoney {},
        #[route("/activity")]
        Activity {},
        #[route("/profile")]
        Profile {},
}

/// Root application component.
///
/// Provides global styles, the app context, the notification toast and
/// routing.
#[component]
pub fn App() -> Element {
    let mut notification: Signal<Option<NotificationSpec>> = use_signal(|| None);
    use_context_provider(|| notification);

    // Open services once and pump delivered notifications into the toast.
    let app = use_hook(|| {
        let (app, mut rx) = AppContext::open(&get_data_dir(), get_wallet_config());
        spawn(async move {
            while let Some(spec) = rx.recv().await {
                tracing::info!(title = %spec.title, "showing notification");
                notification.set(Some(spec));
            }
        });
        app
    });
    use_context_provider(|| app);

    rsx! {
        style { {root_variables()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        NotificationToast {
            notification: notification(),
            on_close: move |_| notification.set(None),
        }
    }
}

/// Shell for the signed-in tabs. Sends the user back to the lock screen
/// while the session has no validated PIN.
#[component]
fn TabLayout() -> Element {
    let app = use_app();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let unlocked = app.session.pin_validated();

    use_effect(move || {
        if !unlocked {
            tracing::info!("PIN not validated, redirecting to lock screen");
            navigator.replace(Route::Pin {});
        }
    });

    if !unlocked {
        return rsx! {};
    }

    rsx! {
        div { class: "app-shell",
            main { class: "tab-content", Outlet::<Route> {} }
            if let Some(current) = Tab::from_route(&route) {
                MobileNav { current }
            }
        }
    }
}
