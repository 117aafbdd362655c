//! Labelled form field wrappers.

use dioxus::prelude::*;

/// Label above arbitrary form content.
#[component]
pub fn FormField(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field",
            label {
                class: "form-label",
                "{label}"
            }
            {children}
        }
    }
}

/// Single-line text input with a label.
#[component]
pub fn TextField(
    label: String,
    value: String,
    placeholder: String,
    #[props(default = false)] numeric: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        FormField {
            label: label,
            input {
                class: "form-input",
                r#type: "text",
                inputmode: if numeric { "numeric" } else { "text" },
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
