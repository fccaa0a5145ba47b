//! Admin post editor: create and edit share one set of fields.

use api::{Id, Post};
use dioxus::prelude::*;
use ui::forms::{FormStatus, PostForm, Submit};
use ui::icons::{FaCircleCheck, FaCircleXmark};
use ui::views::{ErrorBanner, Loading};
use ui::{use_api, Guard, Icon};

use super::guard::Guarded;
use crate::Route;

#[component]
fn PostFields(form: Signal<PostForm>) -> Element {
    let mut form = form;

    rsx! {
        label { r#for: "title", "Title" }
        input {
            id: "title",
            r#type: "text",
            maxlength: 200,
            value: form.read().title.clone(),
            oninput: move |evt| form.write().title = evt.value(),
        }
        label { r#for: "text", "Text" }
        textarea {
            id: "text",
            class: "post-textarea",
            maxlength: 10000,
            value: form.read().text.clone(),
            oninput: move |evt| form.write().text = evt.value(),
        }
        label { r#for: "image-url", "Image URL" }
        input {
            id: "image-url",
            r#type: "url",
            maxlength: 200,
            value: form.read().image_url.clone(),
            oninput: move |evt| form.write().image_url = evt.value(),
        }
        label {
            class: "checkbox",
            input {
                r#type: "checkbox",
                checked: form.read().is_published,
                onchange: move |evt| form.write().is_published = evt.checked(),
            }
            span { "Published" }
        }
    }
}

#[component]
fn FormButtons(submitting: bool, cancel_to: Route, on_submit: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "form-actions",
            Link {
                class: "btn btn-outline",
                to: cancel_to,
                Icon { width: 14, height: 14, icon: FaCircleXmark }
                span { "Cancel" }
            }
            button {
                class: "btn btn-dark",
                disabled: submitting,
                onclick: move |_| on_submit.call(()),
                Icon { width: 14, height: 14, icon: FaCircleCheck }
                span { if submitting { "Saving..." } else { "Save" } }
            }
        }
    }
}

#[component]
pub fn PostCreate(page: usize) -> Element {
    rsx! {
        Guarded {
            guard: Guard::AdminOnly,
            CreatePostPage { page }
        }
    }
}

#[component]
fn CreatePostPage(page: usize) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let form = use_signal(PostForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_| {
        let payload = match form.read().payload() {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        if !status.write().try_begin() {
            return;
        }
        error.set(None);
        let api = api.clone();
        spawn(async move {
            let result = api.posts().create(&payload).await;
            status.write().finish();
            match result {
                Ok(record) => {
                    tracing::info!("Created post {}", record.id);
                    nav.replace(Route::Posts { page: 0 });
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        section {
            class: "page-narrow",
            h1 { "New Post" }
            ErrorBanner { message: error() }
            div {
                class: "card form",
                PostFields { form }
                FormButtons {
                    submitting: status().is_submitting(),
                    cancel_to: Route::Posts { page },
                    on_submit: submit,
                }
            }
        }
    }
}

#[component]
pub fn PostEdit(id: String) -> Element {
    rsx! {
        Guarded {
            guard: Guard::AdminOnly,
            EditPostPage { id }
        }
    }
}

#[component]
fn EditPostPage(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let post_id = use_hook(|| Id::new(id.clone()));

    let mut original = use_signal(|| Option::<Post>::None);
    let mut form = use_signal(PostForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let api = api.clone();
        let post_id = post_id.clone();
        move || {
            let api = api.clone();
            let post_id = post_id.clone();
            async move {
                match api.posts().get_admin(&post_id).await {
                    Ok(post) => {
                        form.set(PostForm::from_post(&post));
                        original.set(Some(post));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
        }
    });

    let detail = Route::PostDetail {
        id: id.clone(),
        page: 0,
    };

    let submit = {
        let detail = detail.clone();
        move |_| {
            let Some(post) = original() else {
                return;
            };
            let payload = match form.read().edit_of(&post) {
                Ok(Submit::Unchanged) => {
                    nav.replace(detail.clone());
                    return;
                }
                Ok(Submit::Send(payload)) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            if !status.write().try_begin() {
                return;
            }
            error.set(None);
            let api = api.clone();
            let detail = detail.clone();
            spawn(async move {
                let result = api.posts().update(&post.id, &payload).await;
                status.write().finish();
                match result {
                    Ok(_) => {
                        nav.replace(detail);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    if original.read().is_none() {
        return rsx! {
            if error().is_some() {
                ErrorBanner { message: error() }
            } else {
                Loading {}
            }
        };
    }

    rsx! {
        section {
            class: "page-narrow",
            h1 { "Edit Post" }
            ErrorBanner { message: error() }
            div {
                class: "card form",
                PostFields { form }
                FormButtons {
                    submitting: status().is_submitting(),
                    cancel_to: detail,
                    on_submit: submit,
                }
            }
        }
    }
}
