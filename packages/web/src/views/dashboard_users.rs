//! Admin user management. The signed-in admin is left out of the list and
//! manages their own account from the account tab.

use api::{Id, User};
use dioxus::prelude::*;
use ui::forms::{AdminUserForm, Confirmation, InlineEdit, Submit};
use ui::icons::{FaCircleCheck, FaCircleXmark, FaPenToSquare, FaTrash};
use ui::pagination::page_after_delete;
use ui::views::{ConfirmationModal, ErrorBanner, Loading, Paginator};
use ui::{lists, use_api, use_config, use_session, Guard, Icon, PageWindow};

use super::guard::Guarded;
use crate::Route;

#[component]
pub fn DashboardUsers(page: usize) -> Element {
    rsx! {
        Guarded {
            guard: Guard::AdminOnly,
            UserList { page }
        }
    }
}

#[component]
fn UserList(page: usize) -> Element {
    let session = use_session();
    let api = use_api();
    let config = use_config();
    let nav = use_navigator();
    let page_size = config.pagination.users_per_page;

    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut edit = use_signal(InlineEdit::<AdminUserForm>::new);
    let mut delete = use_signal(Confirmation::<Id>::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let own_id = session.read().user().map(|u| u.id.clone());
            async move {
                let Some(own_id) = own_id else {
                    return;
                };
                loading.set(true);
                error.set(None);
                match api.users().list().await {
                    Ok(list) => users.set(lists::without(list, &own_id)),
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
            let Some(user_id) = edit.read().target().cloned() else {
                return;
            };
            let Some(current) = users.read().iter().find(|u| u.id == user_id).cloned() else {
                return;
            };
            let submission = edit.read().draft().submission(&current);
            let payload = match submission {
                Ok(Submit::Unchanged) => {
                    edit.write().close();
                    return;
                }
                Ok(Submit::Send(payload)) => payload,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(user_id) = edit.write().begin_save() else {
                return;
            };
            error.set(None);
            let api = api.clone();
            spawn(async move {
                match api.users().update_as_admin(&user_id, &payload).await {
                    Ok(updated) => {
                        lists::patch_by_id(&mut *users.write(), &user_id, |u| {
                            u.name = updated.name;
                            u.email = updated.email;
                            u.is_admin = updated.is_admin;
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
    });

    let confirm_delete = {
        let api = api.clone();
        move |_| {
            let Some(user_id) = delete.write().confirm() else {
                return;
            };
            error.set(None);
            let api = api.clone();
            spawn(async move {
                match api.users().remove(&user_id).await {
                    Ok(()) => {
                        lists::remove_by_id(&mut *users.write(), &user_id);
                        let next = page_after_delete(users.read().as_slice(), page, page_size);
                        if next != page {
                            nav.replace(Route::DashboardUsers { page: next });
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

    let window = PageWindow::new(users.read().len(), page, page_size);
    let visible = window.slice(users.read().as_slice()).to_vec();
    let editing_any = edit.read().target().is_some();

    rsx! {
        section {
            class: "dashboard-users",
            ErrorBanner { message: error() }
            for user in visible {
                if edit.read().is_editing(&user.id) {
                    UserEditor {
                        key: "{user.id}",
                        form: edit.read().draft().clone(),
                        saving: edit.read().is_saving(),
                        on_change: move |form: AdminUserForm| *edit.write().draft_mut() = form,
                        on_save: move |_| save.call(()),
                        on_cancel: move |_| edit.write().close(),
                    }
                } else {
                    UserCard {
                        key: "{user.id}",
                        user: user.clone(),
                        show_actions: !editing_any,
                        on_edit: {
                            let user = user.clone();
                            move |_| edit.write().open(user.id.clone(), AdminUserForm::from_user(&user))
                        },
                        on_delete: {
                            let id = user.id.clone();
                            move |_| delete.write().request(id.clone())
                        },
                    }
                }
            }
            if window.needs_paginator() {
                Paginator {
                    page,
                    page_count: window.page_count(),
                    on_change: move |p: usize| {
                        nav.push(Route::DashboardUsers { page: p });
                    },
                }
            }
            ConfirmationModal {
                subject: "user",
                open: delete.read().is_open(),
                on_close: move |_| delete.write().cancel(),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn UserCard(
    user: User,
    show_actions: bool,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let admin = if user.is_admin { "Yes" } else { "No" };

    rsx! {
        article {
            class: "user-card",
            div { "Username: {user.name}" }
            div { "Email: {user.email}" }
            div { "Is Admin: {admin}" }
            if show_actions {
                div {
                    class: "user-actions",
                    button {
                        class: "btn btn-dark btn-small",
                        onclick: move |_| on_delete.call(()),
                        Icon { width: 12, height: 12, icon: FaTrash }
                        span { "Delete" }
                    }
                    button {
                        class: "btn btn-dark btn-small",
                        onclick: move |_| on_edit.call(()),
                        Icon { width: 12, height: 12, icon: FaPenToSquare }
                        span { "Edit" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserEditor(
    form: AdminUserForm,
    saving: bool,
    on_change: EventHandler<AdminUserForm>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let with_username = {
        let form = form.clone();
        move |evt: FormEvent| {
            on_change.call(AdminUserForm {
                username: evt.value(),
                ..form.clone()
            })
        }
    };
    let with_email = {
        let form = form.clone();
        move |evt: FormEvent| {
            on_change.call(AdminUserForm {
                email: evt.value(),
                ..form.clone()
            })
        }
    };
    let with_admin = {
        let form = form.clone();
        move |evt: FormEvent| {
            on_change.call(AdminUserForm {
                is_admin: evt.checked(),
                ..form.clone()
            })
        }
    };

    rsx! {
        article {
            class: "user-card form",
            label { r#for: "edit-username", "Username:" }
            input {
                id: "edit-username",
                r#type: "text",
                maxlength: 30,
                value: form.username.clone(),
                oninput: with_username,
            }
            label { r#for: "edit-email", "Email:" }
            input {
                id: "edit-email",
                r#type: "email",
                maxlength: 100,
                value: form.email.clone(),
                oninput: with_email,
            }
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: form.is_admin,
                    onchange: with_admin,
                }
                span { "Is Admin?" }
            }
            div {
                class: "user-actions",
                button {
                    class: "btn btn-dark btn-small",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    Icon { width: 12, height: 12, icon: FaCircleCheck }
                    span { "Update" }
                }
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| on_cancel.call(()),
                    Icon { width: 12, height: 12, icon: FaCircleXmark }
                    span { "Cancel" }
                }
            }
        }
    }
}
