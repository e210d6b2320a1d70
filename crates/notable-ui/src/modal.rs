//! Blocking modal dialog rendered through the overlay root.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::button::{Button, ButtonVariant};
use crate::document::{ScrollLock, use_document_root};
use crate::overlay::{next_layer_id, use_overlay_registry};

/// Full-viewport modal dialog.
///
/// The modal holds no open/closed state of its own: it is driven entirely by
/// the caller's `open` flag, and both close affordances only invoke
/// `on_close` — turning that into a flag change is the caller's job.
///
/// While open, the modal attaches its surface to the enclosing
/// [`OverlayRoot`](crate::overlay::OverlayRoot) and holds the document
/// scroll lock. Closing or unmounting detaches the surface and releases the
/// lock.
#[component]
pub fn Modal(
    title: String,
    open: Signal<bool>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let mut registry = use_overlay_registry();
    let root = use_document_root();
    let layer = use_hook(next_layer_id);
    let lock = use_hook(|| Rc::new(RefCell::new(None::<ScrollLock>)));

    // Lock transitions follow the flag. The guard slot is only filled when
    // empty, so a previous open state's lock is never replaced live; it is
    // released before any later acquisition.
    use_effect({
        let lock = lock.clone();
        let root = root.clone();
        move || {
            if open() {
                let mut slot = lock.borrow_mut();
                if slot.is_none() {
                    *slot = Some(ScrollLock::acquire(root.clone()));
                }
            } else {
                lock.borrow_mut().take();
                registry.detach(layer);
            }
        }
    });

    // Unmounting while open must release the lock and remove the surface.
    use_drop({
        let lock = lock.clone();
        move || {
            registry.detach(layer);
            lock.borrow_mut().take();
        }
    });

    if !open() {
        return rsx! {};
    }

    registry.attach(
        layer,
        rsx! {
            div { class: "modal-overlay",
                div { class: "modal-card",
                    header { class: "modal-header",
                        h3 { class: "modal-title", "{title}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                    div { class: "modal-body", {children} }
                    footer { class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                        Button {
                            onclick: move |_| on_close.call(()),
                            "Confirm"
                        }
                    }
                }
            }
        },
    );

    // The modal occupies no space at its logical position.
    rsx! {}
}
