use api::Post;
use dioxus::prelude::*;
use ui::format::post_date;
use ui::icons::{FaImage, FaPlus};
use ui::views::{ErrorBanner, Loading, Paginator};
use ui::{use_api, use_config, use_session, Icon, PageWindow};

use crate::Route;

/// Paginated post listing. Admins see unpublished posts too.
#[component]
pub fn Posts(page: usize) -> Element {
    let session = use_session();
    let api = use_api();
    let config = use_config();
    let nav = use_navigator();

    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Refetches when the session flips between admin and non-admin
    let _loader = use_resource(move || {
        let api = api.clone();
        let is_admin = session.read().is_admin();
        async move {
            loading.set(true);
            error.set(None);
            match api.posts().list_for(is_admin).await {
                Ok(list) => posts.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { Loading {} };
    }
    if error().is_some() {
        return rsx! { ErrorBanner { message: error() } };
    }

    let is_admin = session.read().is_admin();
    let window = PageWindow::new(posts.read().len(), page, config.pagination.posts_per_page);
    let visible = window.slice(posts.read().as_slice()).to_vec();

    rsx! {
        section {
            class: "page-wide",
            div {
                class: "page-heading",
                h1 { "All Posts" }
                if is_admin {
                    Link {
                        class: "btn btn-dark",
                        to: Route::PostCreate { page },
                        Icon { width: 16, height: 16, icon: FaPlus }
                        span { "Add Post" }
                    }
                }
            }
            div {
                class: "post-grid",
                for post in visible {
                    PostCard { key: "{post.id}", post, page }
                }
            }
            if window.needs_paginator() {
                Paginator {
                    page,
                    page_count: window.page_count(),
                    on_change: move |p: usize| {
                        nav.push(Route::Posts { page: p });
                    },
                }
            }
        }
    }
}

#[component]
fn PostCard(post: Post, page: usize) -> Element {
    let date = post_date(&post.created_at);

    rsx! {
        Link {
            class: "post-card",
            to: Route::PostDetail { id: post.id.to_string(), page },
            if let Some(url) = post.image_url.as_deref().filter(|u| !u.is_empty()) {
                img { class: "post-card-image", src: "{url}", alt: "{post.title}" }
            } else {
                div {
                    class: "post-card-image placeholder",
                    Icon { width: 48, height: 48, icon: FaImage }
                }
            }
            div {
                class: "post-meta",
                span { "{date}" }
                span { "•" }
                span { "{post.author.name}" }
                if !post.is_published {
                    span { class: "badge", "Unpublished" }
                }
            }
            h2 { class: "post-card-title", "{post.title}" }
            p { class: "post-card-text", "{post.text}" }
        }
    }
}
