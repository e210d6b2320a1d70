//! Demo workspace page composing the shared components.

use dioxus::prelude::*;

use notable_ui::{
    BaseLayout, Button, ButtonVariant, Modal, OverlayRoot, TextInput, ThemeProvider,
};

/// Root application component.
#[component]
pub fn App() -> Element {
    rsx! {
        ThemeProvider {
            OverlayRoot {
                WorkspacePage {}
            }
        }
    }
}

#[component]
fn WorkspacePage() -> Element {
    let mut modal_open = use_signal(|| false);

    rsx! {
        BaseLayout {
            div { class: "card-grid",
                div { class: "card",
                    h2 { class: "card-title", "Create a note" }
                    p { class: "card-hint",
                        "Capture thoughts quickly with reusable inputs and buttons."
                    }
                    div { class: "card-form",
                        TextInput { label: "Title", placeholder: "Meeting notes" }
                        TextInput { label: "Tags", placeholder: "Productivity, Planning" }
                        Button {
                            class: "full-width",
                            onclick: move |_| modal_open.set(true),
                            "Save draft"
                        }
                    }
                }
                div { class: "card",
                    h2 { class: "card-title", "Shared components" }
                    ul { class: "card-list",
                        li { "Base layout with responsive spacing." }
                        li { "Light and dark palettes driven by CSS variables." }
                        li { "Buttons, inputs, modals, and sidebars ready to reuse." }
                    }
                    div { class: "card-actions",
                        Button { "Primary" }
                        Button { variant: ButtonVariant::Secondary, "Secondary" }
                        Button { variant: ButtonVariant::Ghost, "Ghost" }
                    }
                }
            }

            Modal {
                title: "Save draft",
                open: modal_open,
                on_close: move |_| modal_open.set(false),
                p { class: "card-hint",
                    "This modal reuses the shared button component and respects the active theme."
                }
            }
        }
    }
}
