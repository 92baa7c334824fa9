//! In-app rendering of worker notifications.

use dioxus::prelude::*;
use pocketpay_core::NotificationSpec;

/// How long a toast stays up before closing itself
pub const TOAST_LIFETIME_MS: u64 = 4_000;

/// Properties for the NotificationToast component
#[derive(Clone, PartialEq, Props)]
pub struct NotificationToastProps {
    pub notification: Option<NotificationSpec>,
    pub on_close: EventHandler<()>,
}

/// Banner for the most recent notification. Closes on tap or after
/// [`TOAST_LIFETIME_MS`].
#[component]
pub fn NotificationToast(props: NotificationToastProps) -> Element {
    let on_close = props.on_close;
    let mut shown = use_signal(|| 0u64);

    // A newer notification supersedes the timer of the one it replaced.
    use_effect(use_reactive((&props.notification,), move |(notification,)| {
        if notification.is_none() {
            return;
        }
        let generation = *shown.peek() + 1;
        shown.set(generation);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
            if *shown.peek() == generation {
                on_close.call(());
            }
        });
    }));

    let Some(notification) = &props.notification else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "toast",
            role: "status",
            "aria-live": "polite",
            onclick: move |_| on_close.call(()),
            img { class: "toast-icon", src: notification.icon, alt: "" }
            div { class: "toast-text",
                strong { class: "toast-title", "{notification.title}" }
                p { class: "toast-body", "{notification.body}" }
            }
        }
    }
}
