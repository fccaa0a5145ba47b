use dioxus::prelude::*;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Travel Blog" }
            p { "Stories, photos and tips from the road." }
            Link {
                class: "btn btn-dark",
                to: Route::Posts { page: 0 },
                "Read the blog"
            }
        }
    }
}
