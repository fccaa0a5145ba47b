use dioxus::prelude::*;

/// Banner for the last failure of a view. Hidden when `message` is `None`.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(text) => rsx! {
            div { class: "error-banner", role: "alert", "{text}" }
        },
        None => rsx! {},
    }
}

/// Centered placeholder shown while a list or entity is loading.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}
