//! Dashboard comment management. Admins manage every comment, everyone
//! else manages their own.

use api::{Comment, Id};
use dioxus::prelude::*;
use ui::comment_filter::{author_options, post_options, CommentFilter, ALL_AUTHORS, ALL_POSTS};
use ui::forms::{self, Confirmation, InlineEdit, Submit};
use ui::pagination::page_after_delete;
use ui::views::{ConfirmationModal, ErrorBanner, Loading, Paginator};
use ui::{lists, use_api, use_config, use_session, PageWindow};

use super::comment_card::CommentCard;
use crate::Route;

#[component]
pub fn DashboardComments(page: usize) -> Element {
    let session = use_session();
    let api = use_api();
    let config = use_config();
    let nav = use_navigator();
    let page_size = config.pagination.comments_per_page;

    let mut comments = use_signal(Vec::<Comment>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(CommentFilter::new);
    let mut edit = use_signal(InlineEdit::<String>::new);
    let mut delete = use_signal(Confirmation::<Id>::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let viewer = session
                .read()
                .user()
                .map(|u| (u.id.clone(), u.is_admin));
            async move {
                let Some((user_id, is_admin)) = viewer else {
                    return;
                };
                loading.set(true);
                error.set(None);
                let result = if is_admin {
                    api.comments().list().await
                } else {
                    api.comments().list_by_author(&user_id).await
                };
                match result {
                    Ok(list) => comments.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let save = use_callback({
        let api = api.clone();
        move |()| {
            if edit.read().is_saving() {
                return;
            }
            let Some(comment_id) = edit.read().target().cloned() else {
                return;
            };
            let current = comments
                .read()
                .iter()
                .find(|c| c.id == comment_id)
                .map(|c| c.text.clone())
                .unwrap_or_default();
            let draft = edit.read().draft().clone();

            match forms::comment_edit(&current, &draft) {
                Ok(Submit::Unchanged) => edit.write().close(),
                Err(e) => {
                    edit.write().close();
                    error.set(Some(e.to_string()));
                }
                Ok(Submit::Send(payload)) => {
                    let Some(comment_id) = edit.write().begin_save() else {
                        return;
                    };
                    error.set(None);
                    let api = api.clone();
                    spawn(async move {
                        match api.comments().update(&comment_id, &payload).await {
                            Ok(record) => {
                                lists::patch_by_id(&mut *comments.write(), &comment_id, |c| {
                                    c.apply_record(&record)
                                });
                                edit.write().close();
                            }
                            Err(e) => {
                                edit.write().finish_save();
                                error.set(Some(e.to_string()));
                            }
                        }
                    });
                }
            }
        }
    });

    let confirm_delete = {
        let api = api.clone();
        move |_| {
            let Some(comment_id) = delete.write().confirm() else {
                return;
            };
            error.set(None);
            let api = api.clone();
            spawn(async move {
                match api.comments().remove(&comment_id).await {
                    Ok(()) => {
                        lists::remove_by_id(&mut *comments.write(), &comment_id);
                        filter.write().reconcile(&comments.read());
                        let next = {
                            let all = comments.read();
                            page_after_delete(&filter.read().apply(&all), page, page_size)
                        };
                        if next != page {
                            nav.replace(Route::DashboardComments { page: next });
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    if loading() {
        return rsx! { Loading {} };
    }

    let viewer = session.read().user().cloned();
    let is_admin = viewer.as_ref().is_some_and(|u| u.is_admin);
    let all = comments.read().clone();
    let authors = author_options(&all);
    let posts = post_options(&all);
    let current = filter();
    let filtered: Vec<Comment> = current.apply(&all).into_iter().cloned().collect();
    let window = PageWindow::new(filtered.len(), page, page_size);
    let visible = window.slice(&filtered).to_vec();

    rsx! {
        section {
            class: "dashboard-comments",
            ErrorBanner { message: error() }
            if all.is_empty() {
                p { class: "empty", "No comments yet." }
            }
            div {
                class: "comment-filters",
                if authors.len() > 1 {
                    select {
                        value: current.author_label().to_string(),
                        onchange: move |evt| {
                            filter.write().select_author(&evt.value(), &comments.read());
                            nav.replace(Route::DashboardComments { page: 0 });
                        },
                        option { value: ALL_AUTHORS, "{ALL_AUTHORS}" }
                        for name in authors {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
                if posts.len() > 1 {
                    select {
                        value: current.post_label().to_string(),
                        onchange: move |evt| {
                            filter.write().select_post(&evt.value(), &comments.read());
                            nav.replace(Route::DashboardComments { page: 0 });
                        },
                        option { value: ALL_POSTS, "{ALL_POSTS}" }
                        for title in posts {
                            option { key: "{title}", value: "{title}", "{title}" }
                        }
                    }
                }
            }
            for comment in visible {
                CommentCard {
                    key: "{comment.id}",
                    comment: comment.clone(),
                    show_post_title: true,
                    can_edit: lists::is_own_comment(viewer.as_ref(), &comment, !is_admin),
                    can_delete: true,
                    editing: edit.read().is_editing(&comment.id),
                    draft: edit.read().draft().clone(),
                    saving: edit.read().is_saving(),
                    on_edit: {
                        let id = comment.id.clone();
                        let text = comment.text.clone();
                        move |_| edit.write().open(id.clone(), text.clone())
                    },
                    on_draft: move |text: String| *edit.write().draft_mut() = text,
                    on_save: move |_| save.call(()),
                    on_cancel: move |_| edit.write().close(),
                    on_delete: {
                        let id = comment.id.clone();
                        move |_| delete.write().request(id.clone())
                    },
                }
            }
            if window.needs_paginator() {
                Paginator {
                    page,
                    page_count: window.page_count(),
                    on_change: move |p: usize| {
                        nav.push(Route::DashboardComments { page: p });
                    },
                }
            }
            ConfirmationModal {
                subject: "comment",
                open: delete.read().is_open(),
                on_close: move |_| delete.write().cancel(),
                on_confirm: confirm_delete,
            }
        }
    }
}
