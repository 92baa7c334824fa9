//! Carousel hook and widgets.
//!
//! [`use_carousel`] owns the controller and its ticker. The ticker is a
//! scope-owned task, so unmounting the component drops it and no timer
//! outlives the carousel. Each wake is aligned to the start of the current
//! step, so a manual change restarts the tick cadence with the step timer.

use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use pocketpay_core::{CarouselConfig, CarouselController, StepChange};
use tokio::time::Instant;

use crate::tokens::{self, Style};

/// Create a carousel of `steps` steps and start its clock.
///
/// Invalid configs are logged and replaced with defaults.
pub fn use_carousel(steps: usize, config: CarouselConfig) -> Signal<CarouselController> {
    let mut carousel = use_signal(move || {
        CarouselController::new(steps, config).unwrap_or_else(|e| {
            tracing::warn!("Invalid carousel config, using defaults: {}", e);
            CarouselController::with_default_config(steps)
        })
    });

    use_hook(move || {
        spawn(async move {
            loop {
                let wait = carousel.peek().until_next_tick(Instant::now());
                tokio::time::sleep(wait).await;
                let change = carousel.write().advance_to(Instant::now());
                if let Some(change) = change {
                    tracing::debug!(from = change.from, to = change.to, "carousel auto-advance");
                }
            }
        })
    });

    carousel
}

/// Properties for the SwipeArea component
#[derive(Clone, PartialEq, Props)]
pub struct SwipeAreaProps {
    pub carousel: Signal<CarouselController>,
    /// Called after a swipe moved the carousel
    #[props(default)]
    pub on_change: Option<EventHandler<StepChange>>,
    pub children: Element,
}

/// Horizontal swipe surface that drives a carousel
#[component]
pub fn SwipeArea(props: SwipeAreaProps) -> Element {
    let mut carousel = props.carousel;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "swipe-area",
            style: "touch-action: pan-y;",
            onpointerdown: move |e: PointerEvent| {
                carousel.write().touch_start(e.pointer_id(), e.client_coordinates().x);
            },
            onpointermove: move |e: PointerEvent| {
                if carousel.peek().is_tracking() {
                    carousel.write().touch_move(e.pointer_id(), e.client_coordinates().x);
                }
            },
            onpointerup: move |e: PointerEvent| {
                let change = carousel.write().touch_end(e.pointer_id());
                if let (Some(change), Some(handler)) = (change, on_change) {
                    handler.call(change);
                }
            },
            onpointercancel: move |e: PointerEvent| carousel.write().touch_cancel(e.pointer_id()),
            {props.children}
        }
    }
}

/// Properties for the StepProgress component
#[derive(Clone, PartialEq, Props)]
pub struct StepProgressProps {
    pub steps: usize,
    pub current: usize,
    /// Fill of the current step, 0.0 to 1.0
    pub progress: f64,
}

/// One bar per step; finished steps are full, the current one fills up.
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    rsx! {
        div {
            class: "step-progress",
            role: "progressbar",
            "aria-valuemin": "1",
            "aria-valuemax": "{props.steps}",
            "aria-valuenow": "{props.current + 1}",
            for i in 0..props.steps {
                div { key: "{i}", class: "step-track",
                    div {
                        class: "step-fill",
                        style: fill_style(bar_fill(i, props.current, props.progress)),
                    }
                }
            }
        }
    }
}

fn bar_fill(index: usize, current: usize, progress: f64) -> f64 {
    use std::cmp::Ordering;
    match index.cmp(&current) {
        Ordering::Less => 1.0,
        Ordering::Equal => progress.clamp(0.0, 1.0),
        Ordering::Greater => 0.0,
    }
}

fn fill_style(fill: f64) -> String {
    Style::new()
        .set("width", format!("{:.1}%", fill * 100.0))
        .set("background", tokens::BRAND)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_before_current_are_full() {
        assert_eq!(bar_fill(0, 2, 0.3), 1.0);
        assert_eq!(bar_fill(2, 2, 0.3), 0.3);
        assert_eq!(bar_fill(3, 2, 0.3), 0.0);
    }

    #[test]
    fn fill_is_clamped() {
        assert_eq!(bar_fill(1, 1, 1.7), 1.0);
        assert!(fill_style(0.5).starts_with("width: 50.0%;"));
    }
}
