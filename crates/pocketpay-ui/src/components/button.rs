//! Button Components
//!
//! - Primary: filled brand button for the main action of a screen
//! - Secondary: outlined
//! - Ghost: text-only
//! - Danger: destructive actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner and blocks clicks
    #[props(default = false)]
    pub loading: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub full_width: bool,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         full_width: true,
///         onclick: move |_| send(),
///         "Send money"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut class = props.variant.class().to_string();
    if props.full_width {
        class.push_str(" btn-block");
    }
    if props.loading {
        class.push_str(" is-loading");
    }
    let blocked = props.disabled || props.loading;

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: blocked,
            "aria-busy": if props.loading { "true" } else { "false" },
            onclick: move |_| {
                if blocked {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                span { class: "btn-spinner", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
