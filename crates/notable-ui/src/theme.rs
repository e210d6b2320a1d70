//! Theme system for Notable applications.
//!
//! A [`ThemeProvider`] near the root of the tree owns the active
//! [`Appearance`] and mirrors it onto the document root as a `data-theme`
//! attribute so the CSS design tokens resolve. Descendants obtain a
//! [`ThemeHandle`] through [`use_theme`] to read the value or toggle it.

use dioxus::prelude::*;

use crate::document::use_document_root;

/// The active visual mode. Exactly one is in effect at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Returns the CSS `data-theme` attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    /// Returns the display name for the appearance.
    pub fn display_name(&self) -> &'static str {
        match self {
            Appearance::Light => "Light",
            Appearance::Dark => "Dark",
        }
    }

    /// The complementary appearance.
    pub fn toggled(&self) -> Appearance {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Appearance preference signalled by the environment, read once when the
/// provider mounts. `NOTABLE_APPEARANCE=dark` opts into dark mode; anything
/// else, including an unset variable, selects light.
pub fn preferred_appearance() -> Appearance {
    appearance_from_signal(std::env::var("NOTABLE_APPEARANCE").ok().as_deref())
}

fn appearance_from_signal(signal: Option<&str>) -> Appearance {
    match signal {
        Some(value) if value.eq_ignore_ascii_case("dark") => Appearance::Dark,
        _ => Appearance::Light,
    }
}

/// Handle to the theme store provided by an enclosing [`ThemeProvider`].
///
/// The handle is a capability: holding one proves a provider exists above
/// the caller, and it is the only way to mutate the appearance.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeHandle {
    appearance: Signal<Appearance>,
}

impl ThemeHandle {
    /// The current appearance. Reading subscribes the caller to changes.
    pub fn appearance(&self) -> Appearance {
        *self.appearance.read()
    }

    /// Flip the appearance to its complement.
    pub fn toggle(&mut self) {
        let next = self.appearance.peek().toggled();
        tracing::debug!("Theme toggled to {}", next.css_value());
        self.appearance.set(next);
    }
}

/// Owns the appearance state for the subtree and keeps the document root's
/// `data-theme` marker in sync with it.
///
/// The store is created once per mounted root and re-derives its initial
/// value from the ambient preference signal; nothing persists across runs.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let root = use_document_root();
    let handle = use_context_provider(|| ThemeHandle {
        appearance: Signal::new(preferred_appearance()),
    });

    // Mirror the appearance onto the document root so `[data-theme]`
    // selectors resolve. Runs on mount and on every change.
    use_effect(move || {
        root.set_appearance(handle.appearance());
    });

    rsx! {
        {children}
    }
}

/// Access the theme store provided by an enclosing [`ThemeProvider`].
///
/// Panics when no provider exists in the caller's ancestry. That is a
/// composition bug, surfaced immediately rather than defaulted around.
pub fn use_theme() -> ThemeHandle {
    use_hook(|| {
        try_consume_context::<ThemeHandle>()
            .expect("use_theme called outside of a ThemeProvider")
    })
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::document::DocumentRoot;
    use crate::document::test_support::{RecordingRoot, pump};

    thread_local! {
        static ROOT: RefCell<Option<Rc<RecordingRoot>>> = const { RefCell::new(None) };
        static HANDLE: Cell<Option<ThemeHandle>> = const { Cell::new(None) };
    }

    #[component]
    fn Probe() -> Element {
        let handle = use_theme();
        HANDLE.set(Some(handle));
        rsx! {
            div {}
        }
    }

    #[component]
    fn Harness() -> Element {
        let root = ROOT.with_borrow(|r| r.clone()).unwrap();
        use_context_provider(|| root as Rc<dyn DocumentRoot>);

        rsx! {
            ThemeProvider {
                Probe {}
            }
        }
    }

    fn mount() -> (VirtualDom, Rc<RecordingRoot>) {
        let root = Rc::new(RecordingRoot::default());
        ROOT.with_borrow_mut(|r| *r = Some(root.clone()));
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        pump(&mut dom);
        (dom, root)
    }

    #[test]
    fn double_toggle_is_identity() {
        assert_eq!(Appearance::Light.toggled().toggled(), Appearance::Light);
        assert_eq!(Appearance::Dark.toggled().toggled(), Appearance::Dark);
    }

    #[test]
    fn ambient_signal_selects_initial_appearance() {
        assert_eq!(appearance_from_signal(Some("dark")), Appearance::Dark);
        assert_eq!(appearance_from_signal(Some("Dark")), Appearance::Dark);
        assert_eq!(appearance_from_signal(Some("light")), Appearance::Light);
        assert_eq!(appearance_from_signal(Some("solarized")), Appearance::Light);
        assert_eq!(appearance_from_signal(None), Appearance::Light);
    }

    #[test]
    fn marker_follows_store() {
        let (mut dom, root) = mount();
        assert_eq!(root.last_appearance(), Some(Appearance::Light));

        let mut handle = HANDLE.get().unwrap();
        dom.in_runtime(|| handle.toggle());
        pump(&mut dom);
        assert_eq!(root.last_appearance(), Some(Appearance::Dark));

        dom.in_runtime(|| handle.toggle());
        pump(&mut dom);
        assert_eq!(root.last_appearance(), Some(Appearance::Light));
    }

    #[test]
    fn consumers_observe_fresh_snapshots() {
        let (mut dom, _root) = mount();

        let mut handle = HANDLE.get().unwrap();
        dom.in_runtime(|| {
            assert_eq!(handle.appearance(), Appearance::Light);
            handle.toggle();
        });
        pump(&mut dom);
        dom.in_runtime(|| {
            assert_eq!(handle.appearance(), Appearance::Dark);
        });
    }

    #[test]
    #[should_panic(expected = "outside of a ThemeProvider")]
    fn use_theme_requires_provider() {
        let mut dom = VirtualDom::new(Probe);
        dom.rebuild_in_place();
    }
}
