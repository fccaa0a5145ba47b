use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::pagination::{page_items, PageItem};
use crate::Icon;

const PAGE_RANGE: usize = 3;

/// Page control for a paginated list. Pages are zero-based; labels are not.
#[component]
pub fn Paginator(page: usize, page_count: usize, on_change: EventHandler<usize>) -> Element {
    if page_count <= 1 {
        return rsx! {};
    }

    let has_prev = page > 0;
    let has_next = page + 1 < page_count;

    rsx! {
        nav {
            class: "paginator",
            button {
                class: "paginator-arrow",
                disabled: !has_prev,
                onclick: move |_| {
                    if has_prev {
                        on_change.call(page - 1);
                    }
                },
                Icon { width: 20, height: 20, icon: FaChevronLeft }
            }
            for (i, item) in page_items(page, page_count, PAGE_RANGE).into_iter().enumerate() {
                {match item {
                    PageItem::Page(p) => rsx! {
                        button {
                            key: "page-{p}",
                            class: if p == page { "paginator-page active" } else { "paginator-page" },
                            onclick: move |_| on_change.call(p),
                            "{p + 1}"
                        }
                    },
                    PageItem::Gap => rsx! {
                        span { key: "gap-{i}", class: "paginator-gap", "..." }
                    },
                }}
            }
            button {
                class: "paginator-arrow",
                disabled: !has_next,
                onclick: move |_| {
                    if has_next {
                        on_change.call(page + 1);
                    }
                },
                Icon { width: 20, height: 20, icon: FaChevronRight }
            }
        }
    }
}
