use dioxus::prelude::*;

use crate::icons::FaPlane;
use crate::Icon;

/// Site header: brand on the left, route links (passed as children) on the
/// right.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::UI_CSS }
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { width: 22, height: 22, icon: FaPlane }
                {brand}
            }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
