//! Bottom Sheet Component
//!
//! Modal sheet that can be dragged by its handle. All decisions (who may
//! drag, how far the sheet grows, whether a release dismisses) are made by
//! [`SheetController`]; this component only forwards pointer events and
//! paints the height it is told to.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use pocketpay_core::{SheetConfig, SheetController, SheetPhase, SheetRelease, FRAME_INTERVAL};

use crate::tokens::{self, Style};

/// Properties for the BottomSheet component
#[derive(Clone, PartialEq, Props)]
pub struct BottomSheetProps {
    /// Controlled visibility; the parent flips this back in `on_dismiss`
    pub open: bool,
    pub on_dismiss: EventHandler<()>,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub config: SheetConfig,
    pub children: Element,
}

/// Draggable bottom sheet
///
/// # Example
///
/// ```rust,ignore
/// let mut show = use_signal(|| false);
///
/// rsx! {
///     BottomSheet {
///         open: show(),
///         on_dismiss: move |_| show.set(false),
///         title: "Confirm transfer".to_string(),
///         p { "Send $20 to Ana?" }
///     }
/// }
/// ```
#[component]
pub fn BottomSheet(props: BottomSheetProps) -> Element {
    let config = props.config.clone();

    // The controller is the latest-value cell pointer handlers consult; the
    // signals below only exist to trigger renders.
    let controller = use_hook(|| {
        Rc::new(RefCell::new(SheetController::new(config).unwrap_or_else(|e| {
            tracing::warn!("Invalid sheet config, using defaults: {}", e);
            SheetController::default()
        })))
    });
    let mut phase = use_signal(|| SheetPhase::Closed);
    let mut height = use_signal(|| 0.0f64);
    let mut dragging = use_signal(|| false);
    let mut just_dragged = use_signal(|| false);

    let on_dismiss = props.on_dismiss;

    use_effect(use_reactive((&props.open,), {
        let controller = controller.clone();
        move |(open,)| {
            let mut sheet = controller.borrow_mut();
            if open && !sheet.is_open() {
                sheet.open();
                phase.set(SheetPhase::Opening);
                height.set(sheet.visual_height());
                let controller = controller.clone();
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(
                        tokens::DURATION_SHEET_MS as u64,
                    ))
                    .await;
                    let mut sheet = controller.borrow_mut();
                    sheet.finish_opening();
                    phase.set(sheet.phase());
                });
            } else if !open && sheet.is_open() {
                sheet.close();
                phase.set(SheetPhase::Closed);
                dragging.set(false);
            }
        }
    }));

    if phase() == SheetPhase::Closed {
        return rsx! {};
    }

    let begin_drag = {
        let controller = controller.clone();
        move |e: PointerEvent, in_handle: bool| {
            let accepted = controller.borrow_mut().pointer_down(
                e.pointer_id(),
                e.client_coordinates().y,
                in_handle,
            );
            if accepted {
                e.prevent_default();
                dragging.set(true);
            }
        }
    };
    let mut on_handle_down = {
        let mut begin_drag = begin_drag.clone();
        move |e: PointerEvent| begin_drag(e, true)
    };
    let on_body_down = {
        let mut begin_drag = begin_drag.clone();
        move |e: PointerEvent| begin_drag(e, false)
    };

    let on_pointer_move = {
        let controller = controller.clone();
        move |e: PointerEvent| {
            let Some(ticket) = controller
                .borrow_mut()
                .pointer_move(e.pointer_id(), e.client_coordinates().y)
            else {
                return;
            };
            e.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                tokio::time::sleep(FRAME_INTERVAL).await;
                if let Some(h) = controller.borrow_mut().render_frame(ticket) {
                    height.set(h);
                }
            });
        }
    };

    let release = {
        let controller = controller.clone();
        move |pointer_id: i32| {
            let outcome = controller.borrow_mut().pointer_up(pointer_id);
            match outcome {
                SheetRelease::Dismiss => {
                    dragging.set(false);
                    phase.set(SheetPhase::Closed);
                    on_dismiss.call(());
                }
                SheetRelease::SnapBack => {
                    dragging.set(false);
                    // the click that ends this gesture must not reach the backdrop
                    just_dragged.set(true);
                    height.set(controller.borrow().visual_height());
                }
                SheetRelease::Ignored => {}
            }
        }
    };
    let on_pointer_up = {
        let mut release = release.clone();
        move |e: PointerEvent| release(e.pointer_id())
    };
    let on_pointer_cancel = {
        let mut release = release.clone();
        move |e: PointerEvent| release(e.pointer_id())
    };

    // Runs after the handle/body handlers (bubbling), so a drag that just
    // started keeps the flag.
    let on_overlay_down = {
        let controller = controller.clone();
        move |_: PointerEvent| {
            if !controller.borrow().is_dragging() {
                just_dragged.set(false);
            }
        }
    };

    let on_handle_double = {
        let controller = controller.clone();
        move |_| {
            let mut sheet = controller.borrow_mut();
            sheet.expand();
            height.set(sheet.visual_height());
        }
    };

    let on_backdrop = {
        let controller = controller.clone();
        move |_| {
            if controller.borrow().is_dragging() || just_dragged() {
                just_dragged.set(false);
                return;
            }
            controller.borrow_mut().close();
            phase.set(SheetPhase::Closed);
            on_dismiss.call(());
        }
    };

    let style = sheet_style(height(), dragging(), phase() == SheetPhase::Opening);

    rsx! {
        div {
            class: "sheet-overlay",
            style: Style::new().set("background", tokens::SCRIM).build(),
            onclick: on_backdrop,
            onpointerdown: on_overlay_down,
            onpointermove: on_pointer_move,
            onpointerup: on_pointer_up,
            onpointercancel: on_pointer_cancel,

            section {
                class: if dragging() { "bottom-sheet dragging" } else { "bottom-sheet" },
                role: "dialog",
                "aria-modal": "true",
                style: "{style}",
                onclick: move |e| e.stop_propagation(),
                onpointerdown: on_body_down,

                div {
                    class: "sheet-handle",
                    style: "touch-action: none;",
                    onpointerdown: move |e: PointerEvent| {
                        e.stop_propagation();
                        on_handle_down(e);
                    },
                    ondoubleclick: on_handle_double,
                    span { class: "sheet-grabber" }
                }
                if let Some(title) = &props.title {
                    h2 { class: "sheet-title", "{title}" }
                }
                div { class: "sheet-body", {props.children} }
            }
        }
    }
}

fn sheet_style(height: f64, dragging: bool, opening: bool) -> String {
    let transition = if dragging {
        "none".to_string()
    } else {
        tokens::transition("height", tokens::DURATION_SHEET_MS)
    };
    let style = Style::new()
        .px("height", height)
        .set("transition", transition)
        .set("background", tokens::SURFACE)
        .set(
            "border-radius",
            format!("{}px {}px 0 0", tokens::RADIUS_LG, tokens::RADIUS_LG),
        );
    if opening {
        style.set("animation", format!("sheet-enter {}ms {}", tokens::DURATION_SHEET_MS, tokens::EASE_OUT))
    } else {
        style
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_disables_transition() {
        let style = sheet_style(300.0, true, false);
        assert!(style.contains("height: 300.0px;"));
        assert!(style.contains("transition: none;"));
    }

    #[test]
    fn idle_sheet_animates_height() {
        let style = sheet_style(420.0, false, false);
        assert!(style.contains("transition: height 280ms"));
        assert!(!style.contains("animation"));
    }

    #[test]
    fn opening_sheet_runs_enter_animation() {
        assert!(sheet_style(420.0, false, true).contains("animation: sheet-enter 280ms"));
    }
}
