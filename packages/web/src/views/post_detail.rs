//! A single post with its comment thread.

use api::{Comment, Id, Post};
use dioxus::prelude::*;
use ui::format::post_date;
use ui::forms::{self, Confirmation, FormStatus, InlineEdit, Submit};
use ui::icons::{FaArrowLeft, FaEye, FaEyeSlash, FaPenToSquare, FaTrash};
use ui::lists;
use ui::views::{ConfirmationModal, ErrorBanner, Loading};
use ui::{use_api, use_config, use_session, Icon};

use super::comment_card::CommentCard;
use crate::Route;

#[component]
pub fn PostDetail(id: String, page: usize) -> Element {
    let session = use_session();
    let api = use_api();
    let config = use_config();
    let nav = use_navigator();
    let post_id = use_hook(|| Id::new(id.clone()));

    let mut post = use_signal(|| Option::<Post>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut comment_error = use_signal(|| Option::<String>::None);
    let mut new_comment = use_signal(String::new);
    let mut comment_status = use_signal(FormStatus::default);
    let mut publish_status = use_signal(FormStatus::default);
    let mut edit = use_signal(InlineEdit::<String>::new);
    let mut show_all = use_signal(|| false);
    let mut delete_post = use_signal(Confirmation::<Id>::new);
    let mut delete_comment = use_signal(Confirmation::<Id>::new);

    let _loader = use_resource({
        let api = api.clone();
        let post_id = post_id.clone();
        move || {
            let api = api.clone();
            let post_id = post_id.clone();
            let is_admin = session.read().is_admin();
            async move {
                loading.set(true);
                error.set(None);
                match api.posts().get_for(&post_id, is_admin).await {
                    Ok(found) => post.set(Some(found)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let add_comment = {
        let api = api.clone();
        let post_id = post_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let payload = match forms::new_comment(&new_comment.read()) {
                Ok(payload) => payload,
                Err(e) => {
                    comment_error.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(author) = session.read().user().map(|u| u.name.clone()) else {
                return;
            };
            if !comment_status.write().try_begin() {
                return;
            }
            comment_error.set(None);

            let api = api.clone();
            let post_id = post_id.clone();
            spawn(async move {
                let result = api.post_comments(&post_id).create(&payload).await;
                comment_status.write().finish();
                match result {
                    Ok(record) => {
                        if let Some(p) = post.write().as_mut() {
                            lists::prepend(&mut p.comments, Comment::from_created(record, author));
                        }
                        new_comment.set(String::new());
                    }
                    Err(e) => comment_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let save_comment = use_callback({
        let api = api.clone();
        let post_id = post_id.clone();
        move |()| {
            if edit.read().is_saving() {
                return;
            }
            let Some(comment_id) = edit.read().target().cloned() else {
                return;
            };
            let current = post
                .read()
                .as_ref()
                .and_then(|p| p.comments.iter().find(|c| c.id == comment_id))
                .map(|c| c.text.clone())
                .unwrap_or_default();
            let draft = edit.read().draft().clone();

            match forms::comment_edit(&current, &draft) {
                Ok(Submit::Unchanged) => edit.write().close(),
                Err(e) => {
                    edit.write().close();
                    comment_error.set(Some(e.to_string()));
                }
                Ok(Submit::Send(payload)) => {
                    let Some(comment_id) = edit.write().begin_save() else {
                        return;
                    };
                    comment_error.set(None);
                    let api = api.clone();
                    let post_id = post_id.clone();
                    spawn(async move {
                        match api.post_comments(&post_id).update(&comment_id, &payload).await {
                            Ok(record) => {
                                if let Some(p) = post.write().as_mut() {
                                    lists::patch_by_id(&mut p.comments, &comment_id, |c| {
                                        c.apply_record(&record)
                                    });
                                }
                                edit.write().close();
                            }
                            Err(e) => {
                                edit.write().finish_save();
                                comment_error.set(Some(e.to_string()));
                            }
                        }
                    });
                }
            }
        }
    });

    let confirm_delete_comment = {
        let api = api.clone();
        let post_id = post_id.clone();
        move |_| {
            let Some(comment_id) = delete_comment.write().confirm() else {
                return;
            };
            comment_error.set(None);
            let api = api.clone();
            let post_id = post_id.clone();
            spawn(async move {
                match api.post_comments(&post_id).remove(&comment_id).await {
                    Ok(()) => {
                        if let Some(p) = post.write().as_mut() {
                            lists::remove_by_id(&mut p.comments, &comment_id);
                        }
                    }
                    Err(e) => comment_error.set(Some(e.to_string())),
                }
            });
        }
    };

    let toggle_publish = {
        let api = api.clone();
        let post_id = post_id.clone();
        move |_| {
            let Some(payload) = post.read().as_ref().map(Post::publish_toggle_payload) else {
                return;
            };
            if !publish_status.write().try_begin() {
                return;
            }
            error.set(None);
            let api = api.clone();
            let post_id = post_id.clone();
            spawn(async move {
                let result = api.posts().update(&post_id, &payload).await;
                publish_status.write().finish();
                match result {
                    Ok(record) => {
                        if let Some(p) = post.write().as_mut() {
                            p.apply_record(&record);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let confirm_delete_post = {
        let api = api.clone();
        move |_| {
            let Some(target) = delete_post.write().confirm() else {
                return;
            };
            error.set(None);
            let api = api.clone();
            spawn(async move {
                match api.posts().remove(&target).await {
                    Ok(()) => {
                        nav.replace(Route::Posts { page: 0 });
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    if loading() {
        return rsx! { Loading {} };
    }
    let Some(current) = post() else {
        return rsx! {
            section {
                class: "page-narrow",
                ErrorBanner { message: error() }
                Link { to: Route::Posts { page }, "Return to the blog" }
            }
        };
    };

    let viewer = session.read().user().cloned();
    let is_admin = viewer.as_ref().is_some_and(|u| u.is_admin);
    let signed_in = viewer.is_some();
    let preview = config.pagination.comments_preview;
    let comment_count = current.comments.len();
    let visible = lists::visible_comments(&current.comments, preview, show_all()).to_vec();
    let offers_show_all = lists::offers_show_all(&current.comments, preview, show_all());
    let created = post_date(&current.created_at);
    let updated = post_date(&current.updated_at);

    rsx! {
        article {
            class: "page-narrow post",
            Link {
                class: "back-link",
                to: Route::Posts { page },
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                span { "Return to the blog" }
            }
            ErrorBanner { message: error() }

            if is_admin {
                div {
                    class: "post-admin",
                    button {
                        class: "btn btn-outline",
                        disabled: publish_status().is_submitting(),
                        onclick: toggle_publish,
                        if current.is_published {
                            Icon { width: 14, height: 14, icon: FaEyeSlash }
                            span { "Unpublish" }
                        } else {
                            Icon { width: 14, height: 14, icon: FaEye }
                            span { "Publish" }
                        }
                    }
                    Link {
                        class: "btn btn-outline",
                        to: Route::PostEdit { id: current.id.to_string() },
                        Icon { width: 14, height: 14, icon: FaPenToSquare }
                        span { "Edit" }
                    }
                    button {
                        class: "btn btn-dark",
                        onclick: {
                            let target = current.id.clone();
                            move |_| delete_post.write().request(target.clone())
                        },
                        Icon { width: 14, height: 14, icon: FaTrash }
                        span { "Delete" }
                    }
                }
            }

            h1 { "{current.title}" }
            div {
                class: "post-meta",
                span { "{created}" }
                span { "•" }
                span { "{current.author.name}" }
                if current.is_edited() {
                    span { class: "post-edited", "(edited {updated})" }
                }
            }
            if let Some(url) = current.image_url.as_deref().filter(|u| !u.is_empty()) {
                img { class: "post-image", src: "{url}", alt: "{current.title}" }
            }
            div { class: "post-text", "{current.text}" }

            section {
                class: "comments",
                h2 { "Comments ({comment_count})" }
                ErrorBanner { message: comment_error() }
                if signed_in {
                    form {
                        class: "comment-form",
                        onsubmit: add_comment,
                        textarea {
                            placeholder: "Leave a comment",
                            maxlength: 1000,
                            value: "{new_comment}",
                            oninput: move |evt| new_comment.set(evt.value()),
                        }
                        button {
                            class: "btn btn-dark",
                            r#type: "submit",
                            disabled: comment_status().is_submitting(),
                            "Add Comment"
                        }
                    }
                }
                for comment in visible {
                    CommentCard {
                        key: "{comment.id}",
                        comment: comment.clone(),
                        can_edit: lists::is_own_comment(viewer.as_ref(), &comment, false),
                        can_delete: is_admin || lists::is_own_comment(viewer.as_ref(), &comment, false),
                        editing: edit.read().is_editing(&comment.id),
                        draft: edit.read().draft().clone(),
                        saving: edit.read().is_saving(),
                        on_edit: {
                            let id = comment.id.clone();
                            let text = comment.text.clone();
                            move |_| edit.write().open(id.clone(), text.clone())
                        },
                        on_draft: move |text: String| *edit.write().draft_mut() = text,
                        on_save: move |_| save_comment.call(()),
                        on_cancel: move |_| edit.write().close(),
                        on_delete: {
                            let id = comment.id.clone();
                            move |_| delete_comment.write().request(id.clone())
                        },
                    }
                }
                if offers_show_all {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| show_all.set(true),
                        "Show All Comments"
                    }
                }
            }

            ConfirmationModal {
                subject: "post",
                open: delete_post.read().is_open(),
                on_close: move |_| delete_post.write().cancel(),
                on_confirm: confirm_delete_post,
            }
            ConfirmationModal {
                subject: "comment",
                open: delete_comment.read().is_open(),
                on_close: move |_| delete_comment.write().cancel(),
                on_confirm: confirm_delete_comment,
            }
        }
    }
}
