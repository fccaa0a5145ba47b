use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Blocking confirmation for a destructive action.
///
/// Renders nothing while `open` is false. `subject` names what is deleted
/// ("post", "comment", "user", "account").
#[component]
pub fn ConfirmationModal(
    subject: String,
    open: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-body",
                h2 { "Do you really want to delete this {subject}?" }
                p { class: "modal-warning", "This action cannot be undone!" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 14, height: 14, icon: FaCircleXmark }
                        span { "Cancel" }
                    }
                    button {
                        class: "btn btn-dark",
                        onclick: move |_| on_confirm.call(()),
                        Icon { width: 14, height: 14, icon: FaCircleCheck }
                        span { "Yes, delete it" }
                    }
                }
            }
        }
    }
}
