//! Base layout for the workspace shell: sidebar, header, and content grid.

use dioxus::prelude::*;

use crate::button::{Button, ButtonVariant};
use crate::sidebar::{NavItem, Sidebar};
use crate::theme::{Appearance, use_theme};

fn default_nav() -> Vec<NavItem> {
    [
        ("Dashboard", "#dashboard", "📊", true),
        ("Notes", "#notes", "📝", false),
        ("Tasks", "#tasks", "✅", false),
        ("Settings", "#settings", "⚙️", false),
    ]
    .into_iter()
    .map(|(label, href, icon, active)| NavItem {
        label: label.to_string(),
        href: href.to_string(),
        icon: Some(icon.to_string()),
        active,
    })
    .collect()
}

/// Workspace shell layout. The sidebar footer carries the theme toggle, so
/// the layout must sit under a `ThemeProvider`.
#[component]
pub fn BaseLayout(nav_items: Option<Vec<NavItem>>, children: Element) -> Element {
    let mut theme = use_theme();
    let toggle_label = match theme.appearance() {
        Appearance::Light => "Toggle Dark Mode",
        Appearance::Dark => "Toggle Light Mode",
    };
    let items = nav_items.unwrap_or_else(default_nav);

    rsx! {
        div { class: "layout",
            Sidebar {
                items,
                footer: rsx! {
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "full-width",
                        onclick: move |_| theme.toggle(),
                        "{toggle_label}"
                    }
                },
            }
            main { class: "layout-main",
                header { class: "layout-header",
                    div {
                        p { class: "layout-kicker", "Workspace" }
                        h1 { class: "layout-title", "Welcome to Notable" }
                    }
                    div { class: "layout-actions",
                        Button { variant: ButtonVariant::Secondary, "Invite" }
                        Button { "New Note" }
                    }
                }
                div { class: "layout-grid",
                    section { class: "layout-content", {children} }
                    aside { class: "layout-aside",
                        div { class: "card",
                            h3 { class: "card-title", "Quick tips" }
                            p { class: "card-hint",
                                "Use the theme toggle in the sidebar to switch between light and dark palettes."
                            }
                        }
                    }
                }
            }
        }
    }
}
