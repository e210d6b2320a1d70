//! Shared UI components for Notable applications.
//!
//! Provides the theme system, document-level side effects, the overlay host
//! and modal, and the form and layout primitives shared by Notable's
//! workspace apps.

pub mod button;
pub mod document;
pub mod input;
pub mod layout;
pub mod modal;
pub mod overlay;
pub mod sidebar;
pub mod theme;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use document::{DocumentRoot, ScrollLock, WebviewRoot};
pub use input::TextInput;
pub use layout::BaseLayout;
pub use modal::Modal;
pub use overlay::{OverlayRegistry, OverlayRoot};
pub use sidebar::{NavItem, Sidebar};
pub use theme::{Appearance, ThemeHandle, ThemeProvider, preferred_appearance, use_theme};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
