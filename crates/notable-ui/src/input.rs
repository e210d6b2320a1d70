//! Labeled text input primitive.

use dioxus::prelude::*;

/// Single-line text input with an optional label and error line.
///
/// When `error` is set, the field border switches to the error treatment and
/// the message renders under the input.
#[component]
pub fn TextInput(
    label: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    error: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let field_class = if error.is_some() {
        "input-field input-field-error"
    } else {
        "input-field"
    };

    rsx! {
        label { class: "input-label",
            if let Some(label) = &label {
                "{label}"
            }
            input {
                class: "{field_class}",
                placeholder,
                value,
                oninput: move |evt| {
                    if let Some(handler) = &oninput {
                        handler.call(evt);
                    }
                },
            }
            if let Some(error) = &error {
                span { class: "input-error", "{error}" }
            }
        }
    }
}
