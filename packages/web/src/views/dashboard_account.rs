//! Self-service account settings.
//!
//! Name and email live inside the session token, so changing either one signs
//! the user out and sends them to the login page with a notice. A password
//! change keeps the session.

use api::AccountUpdate;
use dioxus::prelude::*;
use ui::forms::{Confirmation, EmailForm, FormStatus, PasswordForm, Submit, UsernameForm};
use ui::icons::{FaEnvelope, FaKey, FaTrash, FaUser};
use ui::views::{ConfirmationModal, ErrorBanner};
use ui::{use_api, use_session, Icon, LoginNotice, SessionChange};

use super::guard::{login_route, redirect_route};

#[component]
pub fn DashboardAccount() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();

    let user = session.read().user().cloned();
    let mut username = use_signal(|| UsernameForm {
        username: user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
    });
    let mut email = use_signal(|| EmailForm {
        email: user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
        confirm_email: String::new(),
    });
    let mut password = use_signal(PasswordForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut delete = use_signal(Confirmation::<()>::new);

    let Some(user) = user else {
        return rsx! {};
    };

    // Sends one account update; `notice` set means the change invalidates the token
    let mut send = {
        let api = api.clone();
        let user_id = user.id.clone();
        move |payload: AccountUpdate, notice: Option<LoginNotice>| {
            if !status.write().try_begin() {
                return;
            }
            error.set(None);
            let api = api.clone();
            let user_id = user_id.clone();
            spawn(async move {
                let result = api.users().update(&user_id, &payload).await;
                status.write().finish();
                match (result, notice) {
                    (Ok(()), Some(notice)) => {
                        tracing::info!("Account details changed, signing out");
                        session.write().logout();
                        nav.replace(login_route(notice));
                    }
                    (Ok(()), None) => password.set(PasswordForm::default()),
                    (Err(e), _) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_username = {
        let current = user.name.clone();
        let mut send = send.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let submission = username.read().submission(&current);
            match submission {
                Ok(Submit::Unchanged) => {
                    error.set(None);
                    username.write().username.clear();
                }
                Ok(Submit::Send(payload)) => send(payload, Some(LoginNotice::UsernameChanged)),
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    let on_email = {
        let current = user.email.clone();
        let mut send = send.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let submission = email.read().submission(&current);
            match submission {
                Ok(Submit::Unchanged) => {
                    error.set(None);
                    email.set(EmailForm::default());
                }
                Ok(Submit::Send(payload)) => send(payload, Some(LoginNotice::EmailChanged)),
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    let on_password = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = password.read().submission();
        match submission {
            Ok(payload) => send(payload, None),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let confirm_delete = {
        let api = api.clone();
        let user_id = user.id.clone();
        move |_| {
            if delete.write().confirm().is_none() {
                return;
            }
            error.set(None);
            let api = api.clone();
            let user_id = user_id.clone();
            spawn(async move {
                match api.users().remove(&user_id).await {
                    Ok(()) => {
                        tracing::info!("Account deleted");
                        if let SessionChange::SignedOut { redirect } = session.write().logout() {
                            nav.replace(redirect_route(redirect));
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let submitting = status().is_submitting();

    rsx! {
        section {
            class: "dashboard-account",
            ErrorBanner { message: error() }

            form {
                class: "card form",
                onsubmit: on_username,
                h2 {
                    Icon { width: 18, height: 18, icon: FaUser }
                    span { "Change Username" }
                }
                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    r#type: "text",
                    placeholder: "Enter new username",
                    maxlength: 30,
                    value: username.read().username.clone(),
                    oninput: move |evt| username.write().username = evt.value(),
                }
                button { class: "btn btn-dark", r#type: "submit", disabled: submitting, "Update Username" }
            }

            form {
                class: "card form",
                onsubmit: on_email,
                h2 {
                    Icon { width: 18, height: 18, icon: FaEnvelope }
                    span { "Change Email" }
                }
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "Enter new email",
                    maxlength: 100,
                    value: email.read().email.clone(),
                    oninput: move |evt| email.write().email = evt.value(),
                }
                label { r#for: "confirm-email", "Confirm Email" }
                input {
                    id: "confirm-email",
                    r#type: "email",
                    placeholder: "Confirm new email",
                    maxlength: 100,
                    value: email.read().confirm_email.clone(),
                    oninput: move |evt| email.write().confirm_email = evt.value(),
                }
                button { class: "btn btn-dark", r#type: "submit", disabled: submitting, "Update Email" }
            }

            form {
                class: "card form",
                onsubmit: on_password,
                h2 {
                    Icon { width: 18, height: 18, icon: FaKey }
                    span { "Change Password" }
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "Enter new password",
                    maxlength: 100,
                    value: password.read().password.clone(),
                    oninput: move |evt| password.write().password = evt.value(),
                }
                label { r#for: "confirm-password", "Confirm Password" }
                input {
                    id: "confirm-password",
                    r#type: "password",
                    placeholder: "Confirm new password",
                    maxlength: 100,
                    value: password.read().confirm_password.clone(),
                    oninput: move |evt| password.write().confirm_password = evt.value(),
                }
                button { class: "btn btn-dark", r#type: "submit", disabled: submitting, "Update Password" }
            }

            div {
                class: "card form",
                h2 {
                    Icon { width: 18, height: 18, icon: FaTrash }
                    span { "Delete Account" }
                }
                button {
                    class: "btn btn-dark",
                    onclick: move |_| delete.write().request(()),
                    "Delete Account"
                }
            }

            ConfirmationModal {
                subject: "account",
                open: delete.read().is_open(),
                on_close: move |_| delete.write().cancel(),
                on_confirm: confirm_delete,
            }
        }
    }
}
