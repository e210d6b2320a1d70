//! Document-level side effects shared by the theme system and overlays.
//!
//! Both the appearance marker and the scroll lock mutate process-wide state
//! on the rendered document. They are funneled through the [`DocumentRoot`]
//! trait so components stay testable: the desktop webview implementation
//! writes through `document::eval`, while tests inject a recording fake via
//! context.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::theme::Appearance;

/// Handle to the single document-level rendering root.
pub trait DocumentRoot {
    /// Write the active appearance as the `data-theme` attribute on the root
    /// element. One-way write; never read back.
    fn set_appearance(&self, appearance: Appearance);

    /// Lock or unlock background scrolling on the document body.
    fn set_scroll_locked(&self, locked: bool);
}

/// [`DocumentRoot`] backed by the desktop webview DOM.
pub struct WebviewRoot;

impl DocumentRoot for WebviewRoot {
    fn set_appearance(&self, appearance: Appearance) {
        let js = format!(
            "document.documentElement.setAttribute('data-theme', '{}')",
            appearance.css_value()
        );
        document::eval(&js);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let js = if locked {
            "document.body.style.overflow = 'hidden'"
        } else {
            "document.body.style.overflow = 'auto'"
        };
        document::eval(js);
    }
}

/// Resolve the document root for the current tree.
///
/// An ancestor may provide an `Rc<dyn DocumentRoot>` through context to
/// override the destination of document writes; otherwise the webview
/// implementation is used.
pub fn use_document_root() -> Rc<dyn DocumentRoot> {
    use_hook(|| {
        try_consume_context::<Rc<dyn DocumentRoot>>().unwrap_or_else(|| Rc::new(WebviewRoot))
    })
}

/// Scoped scroll lock on the document body.
///
/// Acquiring sets `overflow: hidden`; dropping the guard restores scrolling.
/// The modal holds the guard for exactly as long as it is open, so every exit
/// path out of the open state, including unmount, releases the lock.
///
/// The lock is not reference counted: a second concurrently open overlay
/// would restore scrolling for the first when it closes. Single-overlay use
/// is assumed.
pub struct ScrollLock {
    root: Rc<dyn DocumentRoot>,
}

impl ScrollLock {
    pub fn acquire(root: Rc<dyn DocumentRoot>) -> Self {
        tracing::debug!("Scroll lock acquired");
        root.set_scroll_locked(true);
        ScrollLock { root }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        tracing::debug!("Scroll lock released");
        self.root.set_scroll_locked(false);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use dioxus::prelude::*;
    use futures::FutureExt;

    use super::DocumentRoot;
    use crate::theme::Appearance;

    /// Recording stand-in for the webview document root.
    #[derive(Default)]
    pub struct RecordingRoot {
        pub appearance_writes: RefCell<Vec<Appearance>>,
        pub scroll_writes: RefCell<Vec<bool>>,
    }

    impl RecordingRoot {
        pub fn last_appearance(&self) -> Option<Appearance> {
            self.appearance_writes.borrow().last().copied()
        }
    }

    impl DocumentRoot for RecordingRoot {
        fn set_appearance(&self, appearance: Appearance) {
            self.appearance_writes.borrow_mut().push(appearance);
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_writes.borrow_mut().push(locked);
        }
    }

    /// Drive the headless dom until it goes idle, flushing queued effects.
    pub fn pump(dom: &mut VirtualDom) {
        while dom.wait_for_work().now_or_never().is_some() {
            dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
        }
    }

    #[test]
    fn scroll_lock_releases_on_drop() {
        let root = std::rc::Rc::new(RecordingRoot::default());
        let lock = super::ScrollLock::acquire(root.clone());
        assert_eq!(root.scroll_writes.borrow().as_slice(), &[true]);

        drop(lock);
        assert_eq!(root.scroll_writes.borrow().as_slice(), &[true, false]);
    }
}
