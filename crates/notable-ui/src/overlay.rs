//! Overlay host: re-parents transient surfaces to the root of the tree.
//!
//! Overlays such as the modal are not rendered at their logical position.
//! They attach themselves to the [`OverlayRegistry`] provided by
//! [`OverlayRoot`], which renders every attached layer after the app
//! subtree. Layers therefore paint above all sibling content and escape any
//! ancestor overflow or clipping.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(0);

/// Allocate a process-unique id for an overlay layer.
pub(crate) fn next_layer_id() -> u64 {
    NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A transient surface currently attached to the overlay root.
#[derive(Clone)]
struct OverlayLayer {
    id: u64,
    content: Element,
}

/// Registry of attached overlay layers, provided through context by
/// [`OverlayRoot`].
#[derive(Clone, Copy)]
pub struct OverlayRegistry {
    layers: Signal<Vec<OverlayLayer>>,
}

impl OverlayRegistry {
    /// Attach a layer, or refresh its content if already attached.
    pub(crate) fn attach(&mut self, id: u64, content: Element) {
        let mut layers = self.layers.write();
        match layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => layer.content = content,
            None => layers.push(OverlayLayer { id, content }),
        }
    }

    /// Detach a layer. Detaching an absent layer is a no-op.
    pub(crate) fn detach(&mut self, id: u64) {
        self.layers.write().retain(|layer| layer.id != id);
    }

    #[cfg(test)]
    pub(crate) fn is_attached(&self, id: u64) -> bool {
        self.layers.read().iter().any(|layer| layer.id == id)
    }
}

/// Resolve the overlay registry provided by an enclosing [`OverlayRoot`].
///
/// Panics when no host exists in the caller's ancestry; overlays cannot be
/// re-parented without one.
pub(crate) fn use_overlay_registry() -> OverlayRegistry {
    use_hook(|| {
        try_consume_context::<OverlayRegistry>()
            .expect("overlay rendered outside of an OverlayRoot")
    })
}

/// Wraps the app subtree and hosts overlay layers above it.
#[component]
pub fn OverlayRoot(children: Element) -> Element {
    let registry = use_context_provider(|| OverlayRegistry {
        layers: Signal::new(Vec::new()),
    });

    let layers = registry.layers.read().clone();

    rsx! {
        {children}
        for layer in layers {
            {layer.content}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::document::test_support::pump;

    thread_local! {
        static REGISTRY: Cell<Option<OverlayRegistry>> = const { Cell::new(None) };
    }

    #[component]
    fn Probe() -> Element {
        let registry = use_overlay_registry();
        REGISTRY.set(Some(registry));
        rsx! {
            div {}
        }
    }

    #[component]
    fn Harness() -> Element {
        rsx! {
            OverlayRoot {
                Probe {}
            }
        }
    }

    #[test]
    fn attach_and_detach_layers() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        pump(&mut dom);

        let mut registry = REGISTRY.get().unwrap();
        let id = next_layer_id();

        dom.in_runtime(|| {
            registry.attach(id, rsx! { div { "layer" } });
            assert!(registry.is_attached(id));

            // Re-attaching refreshes content instead of duplicating.
            registry.attach(id, rsx! { div { "fresh layer" } });
            assert_eq!(registry.layers.read().len(), 1);
        });
        pump(&mut dom);

        dom.in_runtime(|| {
            registry.detach(id);
            assert!(!registry.is_attached(id));

            // Detaching an absent layer is a no-op.
            registry.detach(id);
            assert!(!registry.is_attached(id));
        });
    }

    #[test]
    #[should_panic(expected = "outside of an OverlayRoot")]
    fn registry_requires_host() {
        let mut dom = VirtualDom::new(Probe);
        dom.rebuild_in_place();
    }
}
