//! Onboarding page - three slides that advance on their own.
//!
//! Swiping or tapping "Next" restarts the slide timer and the progress bar
//! together.

use dioxus::prelude::*;
use pocketpay_ui::{use_carousel, Button, ButtonVariant, StepProgress, SwipeArea};

use crate::app::Route;
use crate::context::use_app;

struct Slide {
    title: &'static str,
    body: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        title: "Pay in a tap",
        body: "Send money to friends with nothing more than their email.",
    },
    Slide {
        title: "See where it goes",
        body: "Every payment lands in your activity feed the moment it clears.",
    },
    Slide {
        title: "Locked to you",
        body: "A PIN guards the app, and your password never leaves this device.",
    },
];

#[component]
pub fn Onboarding() -> Element {
    let app = use_app();
    let navigator = use_navigator();
    let mut carousel = use_carousel(SLIDES.len(), app.config.carousel.clone());

    let (current, progress, is_last) = {
        let c = carousel.read();
        (c.current(), c.progress(), c.is_last())
    };
    let slide = &SLIDES[current];

    let get_started = move |_: ()| {
        navigator.push(Route::Pin {});
    };

    rsx! {
        main { class: "onboarding",
            StepProgress { steps: SLIDES.len(), current, progress }

            SwipeArea {
                carousel,
                on_change: move |change: pocketpay_core::StepChange| {
                    tracing::debug!(to = change.to, "onboarding swiped");
                },
                section { class: "onboarding-slide",
                    div { class: "onboarding-art", "data-step": "{current}" }
                    h1 { class: "page-title", "{slide.title}" }
                    p { class: "body-text", "{slide.body}" }
                }
            }

            div { class: "onboarding-actions",
                if is_last {
                    Button { full_width: true, onclick: get_started, "Get started" }
                } else {
                    Button {
                        full_width: true,
                        onclick: move |_| {
                            carousel.write().next();
                        },
                        "Next"
                    }
                    Button { variant: ButtonVariant::Ghost, onclick: get_started, "Skip" }
                }
            }
        }
    }
}
