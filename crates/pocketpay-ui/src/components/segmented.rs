//! Segmented Control Component
//!
//! Row of mutually exclusive options with a sliding highlight. The highlight
//! is a single overlay moved onto the measured box of the selected option.
//! Measurement is triggered by events (mount, selection, resize of the
//! container or any option) and is never polled.

use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use pocketpay_core::{SegmentGeometry, SegmentKey, SegmentedState};

use crate::tokens;

/// Properties for the SegmentedControl component
#[derive(Clone, PartialEq, Props)]
pub struct SegmentedControlProps {
    pub options: Vec<String>,
    /// Index of the selected option
    pub selected: usize,
    pub on_select: EventHandler<usize>,
    #[props(default = "Options".to_string())]
    pub aria_label: String,
}

/// Segmented selector with keyboard support
///
/// Arrow keys move the selection with wraparound, Home/End jump to the
/// ends, and the newly selected option takes focus.
///
/// # Example
///
/// ```rust,ignore
/// let mut mode = use_signal(|| 0usize);
///
/// rsx! {
///     SegmentedControl {
///         options: vec!["Send".to_string(), "Request".to_string()],
///         selected: mode(),
///         on_select: move |i| mode.set(i),
///     }
/// }
/// ```
#[component]
pub fn SegmentedControl(props: SegmentedControlProps) -> Element {
    let len = props.options.len();
    let initial = props.selected;
    let on_select = props.on_select;

    let mut state = use_signal(move || SegmentedState::new(len, initial));
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let mut buttons = use_signal(Vec::<Option<Rc<MountedData>>>::new);

    let remeasure = move || {
        spawn(async move {
            let index = state.peek().selected();
            let outer = container.peek().clone();
            let inner = buttons.peek().get(index).cloned().flatten();
            let (Some(outer), Some(inner)) = (outer, inner) else {
                return;
            };
            let Some(geometry) = measure(&outer, &inner).await else {
                return;
            };
            // the selection may have moved on while we awaited the rects
            if state.peek().selected() != index {
                return;
            }
            if let Some(placement) = state.write().place(geometry) {
                tracing::trace!(index, animate = placement.animate, "segment indicator placed");
            }
        });
    };

    use_effect(use_reactive((&props.selected, &len), move |(selected, len)| {
        {
            let mut s = state.write();
            s.set_len(len);
            s.select(selected);
        }
        buttons.write().truncate(len);
        remeasure();
    }));

    let focus = move |index: usize| {
        if let Some(el) = buttons.peek().get(index).cloned().flatten() {
            spawn(async move {
                if let Err(e) = el.set_focus(true).await {
                    tracing::debug!("segment focus failed: {:?}", e);
                }
            });
        }
    };

    let current = state.read().selected();
    let indicator_style = state
        .read()
        .indicator()
        .map(|placement| placement.style(&indicator_transition()));

    rsx! {
        div {
            class: "segmented",
            role: "tablist",
            "aria-label": "{props.aria_label}",
            onmounted: move |e| {
                container.set(Some(e.data()));
                remeasure();
            },
            onresize: move |_| remeasure(),
            onkeydown: move |e: KeyboardEvent| {
                let Some(key) = SegmentKey::from_key_name(&e.key().to_string()) else {
                    return;
                };
                e.prevent_default();
                let moved = state.write().handle_key(key);
                if let Some(index) = moved {
                    on_select.call(index);
                    focus(index);
                    remeasure();
                }
            },

            if let Some(style) = indicator_style {
                span {
                    class: "segmented-indicator",
                    "aria-hidden": "true",
                    style: "{style}",
                }
            }

            for (i, label) in props.options.iter().enumerate() {
                {
                    let active = i == current;
                    rsx! {
                        button {
                            key: "{i}",
                            class: if active { "segment active" } else { "segment" },
                            r#type: "button",
                            role: "tab",
                            "aria-selected": if active { "true" } else { "false" },
                            // roving tabindex: only the selected option is in the tab order
                            tabindex: if active { "0" } else { "-1" },
                            onmounted: move |e| {
                                {
                                    let mut slots = buttons.write();
                                    if slots.len() <= i {
                                        slots.resize(i + 1, None);
                                    }
                                    slots[i] = Some(e.data());
                                }
                                if i == state.peek().selected() {
                                    remeasure();
                                }
                            },
                            onresize: move |_| {
                                if i == state.peek().selected() {
                                    remeasure();
                                }
                            },
                            onclick: move |_| {
                                if state.write().select(i) {
                                    on_select.call(i);
                                    remeasure();
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

async fn measure(container: &MountedData, option: &MountedData) -> Option<SegmentGeometry> {
    let outer = container.get_client_rect().await.ok()?;
    let inner = option.get_client_rect().await.ok()?;
    Some(to_geometry(&inner).relative_to(&to_geometry(&outer)))
}

fn to_geometry(rect: &PixelsRect) -> SegmentGeometry {
    SegmentGeometry::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

fn indicator_transition() -> String {
    format!(
        "{}, {}",
        tokens::transition("transform", tokens::DURATION_INDICATOR_MS),
        tokens::transition("width", tokens::DURATION_INDICATOR_MS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketpay_core::IndicatorPlacement;

    #[test]
    fn transition_covers_position_and_width() {
        let t = indicator_transition();
        assert!(t.starts_with("transform 250ms"));
        assert!(t.contains(", width 250ms"));
    }

    #[test]
    fn unanimated_placement_uses_no_transition() {
        let placement = IndicatorPlacement {
            geometry: SegmentGeometry::new(4.0, 4.0, 96.0, 36.0),
            animate: false,
        };
        let style = placement.style(&indicator_transition());
        assert!(style.contains("translate(4.0px, 4.0px)"));
        assert!(style.ends_with("transition: none;"));
    }
}
