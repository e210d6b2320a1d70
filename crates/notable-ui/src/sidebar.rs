//! Navigation sidebar for the workspace shell.

use dioxus::prelude::*;

/// A single navigation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub icon: Option<String>,
    pub active: bool,
}

/// Vertical navigation sidebar with a brand header and an optional footer
/// slot.
#[component]
pub fn Sidebar(items: Vec<NavItem>, footer: Option<Element>) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand", "Notable" }
            nav { class: "sidebar-nav",
                for item in items {
                    a {
                        key: "{item.href}",
                        class: if item.active { "nav-item active" } else { "nav-item" },
                        href: "{item.href}",
                        if let Some(icon) = &item.icon {
                            span { class: "nav-icon", "{icon}" }
                        }
                        "{item.label}"
                    }
                }
            }
            if let Some(footer) = footer {
                div { class: "sidebar-footer", {footer} }
            }
        }
    }
}
