//! Text field with inline validation message.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Used for the input id and label association
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Field-level validation message shown under the input
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled input; an `error` marks the field invalid and renders the
/// message below it.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     TextField {
///         id: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         error: errors.read().email.as_ref().map(|e| e.to_string()),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let error_id = error_id(&props.id);
    let invalid = props.error.is_some();

    rsx! {
        div { class: if invalid { "form-field has-error" } else { "form-field" },
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                disabled: props.disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(message) = &props.error {
                p { id: "{error_id}", class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub onchange: EventHandler<bool>,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label { class: "checkbox", r#for: "{props.id}",
            input {
                id: "{props.id}",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |e| props.onchange.call(e.checked()),
            }
            span { "{props.label}" }
        }
    }
}

fn error_id(field_id: &str) -> String {
    format!("{}-error", field_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_id_derives_from_field() {
        assert_eq!(error_id("email"), "email-error");
    }
}
