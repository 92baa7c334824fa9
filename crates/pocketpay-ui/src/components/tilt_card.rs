//! Tilt Card Component
//!
//! Wraps its children in a card that leans with the device. Orientation
//! samples feed a [`TiltEngine`]; a frame task paints at most one smoothed
//! update per frame and sleeps while the engine is settled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use pocketpay_core::{
    MotionGate, MotionPermission, TiltConfig, TiltEngine, TiltState, FRAME_INTERVAL,
};
use tokio::sync::Notify;

use crate::motion::WebviewMotion;
use crate::tokens::{self, Style};

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    #[props(default)]
    pub config: TiltConfig,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Device-orientation driven 3D card.
///
/// On platforms that gate motion access behind a user gesture, a small
/// "Enable motion" chip is shown until the user taps it. Until access is
/// granted the card stays flat.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TiltCard {
///         div { class: "balance", "$1,240.00" }
///     }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let config = props.config.clone();
    let hold_angle = -config.offset_beta;

    // Latest-value cell read by the long-lived tasks; `tilt` is what renders.
    let engine = use_hook(|| {
        Rc::new(RefCell::new(TiltEngine::new(config).unwrap_or_else(|e| {
            tracing::warn!("Invalid tilt config, using defaults: {}", e);
            TiltEngine::default()
        })))
    });
    let wake = use_hook(|| Rc::new(Notify::new()));
    let gesture = use_hook(|| Rc::new(Notify::new()));

    let stream_id = use_hook(|| Rc::new(Cell::new(None::<u64>)));

    let mut tilt = use_signal({
        let engine = engine.clone();
        move || engine.borrow().state()
    });
    let mut permission = use_signal(|| MotionPermission::Prompt);
    let mut needs_gesture = use_signal(|| false);

    // Sensor task: probe, wait for a gesture if required, then feed samples.
    use_hook({
        let engine = engine.clone();
        let wake = wake.clone();
        let gesture = gesture.clone();
        let stream_id = stream_id.clone();
        move || {
            spawn(async move {
                let source = WebviewMotion::probe(hold_angle).await;
                stream_id.set(Some(source.id()));
                let mut gate = MotionGate::new(source);

                if gate.needs_gesture() {
                    needs_gesture.set(true);
                    gesture.notified().await;
                    needs_gesture.set(false);
                }
                let decided = gate.request().await;
                permission.set(decided);

                while let Some(sample) = gate.next().await {
                    engine.borrow_mut().push_sample(sample);
                    wake.notify_one();
                }
            })
        }
    });

    // Frame task: fire the pending frame once per interval, idle otherwise.
    use_hook({
        let engine = engine.clone();
        let wake = wake.clone();
        move || {
            spawn(async move {
                loop {
                    if engine.borrow().pending_frame().is_none() {
                        wake.notified().await;
                    }
                    tokio::time::sleep(FRAME_INTERVAL).await;
                    let painted = {
                        let mut e = engine.borrow_mut();
                        e.pending_frame().and_then(|ticket| e.on_frame(ticket))
                    };
                    if let Some(state) = painted {
                        tilt.set(state);
                    }
                }
            })
        }
    });

    use_drop({
        let engine = engine.clone();
        move || {
            engine.borrow_mut().cancel_frame();
            if let Some(id) = stream_id.get() {
                WebviewMotion::stop(id);
            }
        }
    });

    let state = tilt();
    let style = card_style(&state);
    let class = match &props.class {
        Some(extra) => format!("tilt-card {}", extra),
        None => "tilt-card".to_string(),
    };

    rsx! {
        div { class: "tilt-card-wrap",
            div {
                class: "{class}",
                style: "{style}",
                "data-motion": permission_attr(permission()),
                {props.children}
            }
            if needs_gesture() {
                button {
                    class: "tilt-permission-chip",
                    r#type: "button",
                    onclick: move |_| {
                        WebviewMotion::prompt_from_gesture();
                        gesture.notify_one();
                    },
                    "Enable motion"
                }
            }
        }
    }
}

fn card_style(state: &TiltState) -> String {
    Style::new()
        .set("transform", state.transform_css(tokens::TILT_PERSPECTIVE_PX))
        .set("box-shadow", state.shadow_css(tokens::SHADOW))
        .set("will-change", "transform")
        .build()
}

fn permission_attr(permission: MotionPermission) -> &'static str {
    match permission {
        MotionPermission::Prompt => "prompt",
        MotionPermission::Granted => "granted",
        MotionPermission::Denied => "denied",
        MotionPermission::Unsupported => "unsupported",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_card_style() {
        let style = card_style(&TiltState::default());
        assert!(style.starts_with("transform: perspective(800px) rotateX(0.00deg) rotateY(0.00deg);"));
        assert!(style.contains("box-shadow: 0.0px 0.0px 32px"));
    }

    #[test]
    fn permission_attribute_values() {
        assert_eq!(permission_attr(MotionPermission::Granted), "granted");
        assert_eq!(permission_attr(MotionPermission::Unsupported), "unsupported");
    }
}
