//! PIN entry widgets: the dot row and the numeric keypad.

use dioxus::prelude::*;

const KEY_ROWS: [[char; 3]; 3] = [['1', '2', '3'], ['4', '5', '6'], ['7', '8', '9']];

/// Properties for the PinDots component
#[derive(Clone, PartialEq, Props)]
pub struct PinDotsProps {
    /// Digits entered so far
    pub filled: usize,
    pub length: usize,
    /// Shake and tint the row after a wrong PIN
    #[props(default = false)]
    pub error: bool,
}

/// Row of dots showing how many digits are entered, never which.
#[component]
pub fn PinDots(props: PinDotsProps) -> Element {
    let class = if props.error { "pin-dots error" } else { "pin-dots" };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "aria-label": "{props.filled} of {props.length} digits entered",
            for i in 0..props.length {
                span {
                    key: "{i}",
                    class: if i < props.filled { "pin-dot filled" } else { "pin-dot" },
                }
            }
        }
    }
}

/// Properties for the Keypad component
#[derive(Clone, PartialEq, Props)]
pub struct KeypadProps {
    pub on_digit: EventHandler<char>,
    pub on_backspace: EventHandler<()>,
    /// Shows the biometric key in the bottom-left slot when set
    #[props(default)]
    pub on_biometric: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
}

/// 3x4 numeric keypad
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Keypad {
///         on_digit: move |d| { pad.write().press(d); },
///         on_backspace: move |_| pad.write().backspace(),
///     }
/// }
/// ```
#[component]
pub fn Keypad(props: KeypadProps) -> Element {
    let on_digit = props.on_digit;
    let on_backspace = props.on_backspace;
    let disabled = props.disabled;

    rsx! {
        div { class: "keypad", role: "group", "aria-label": "PIN keypad",
            for row in KEY_ROWS {
                for digit in row {
                    button {
                        key: "{digit}",
                        class: "keypad-key",
                        r#type: "button",
                        disabled,
                        onclick: move |_| on_digit.call(digit),
                        "{digit}"
                    }
                }
            }
            if let Some(on_biometric) = props.on_biometric {
                button {
                    class: "keypad-key keypad-aux",
                    r#type: "button",
                    "aria-label": "Use Face ID",
                    disabled,
                    onclick: move |_| on_biometric.call(()),
                    "◉"
                }
            } else {
                span { class: "keypad-spacer" }
            }
            button {
                class: "keypad-key",
                r#type: "button",
                disabled,
                onclick: move |_| on_digit.call('0'),
                "0"
            }
            button {
                class: "keypad-key keypad-aux",
                r#type: "button",
                "aria-label": "Delete digit",
                disabled,
                onclick: move |_| on_backspace.call(()),
                "⌫"
            }
        }
    }
}

/// Map a physical key to a keypad action: a digit, or `None` for backspace.
pub fn keypad_key(key: &str) -> Option<Option<char>> {
    match key {
        "Backspace" | "Delete" => Some(None),
        k if k.len() == 1 && k.chars().all(|c| c.is_ascii_digit()) => k.chars().next().map(Some),
        _ => None,
    }
}
