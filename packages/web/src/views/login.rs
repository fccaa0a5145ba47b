//! Login and sign-up page.
//!
//! The mode lives in the URL (`?signup=true`), so the header's "Sign Up" link
//! and the in-form switch are the same navigation. An advisory notice from a
//! guard redirect or an account change is shown as the initial error.

use dioxus::prelude::*;
use ui::forms::{AuthForm, AuthMode, AuthSubmission, FormStatus};
use ui::icons::{FaEnvelope, FaKey, FaUser};
use ui::views::ErrorBanner;
use ui::{use_api, use_session, Guard, Icon, LoginNotice, SessionChange};

use super::guard::{redirect_route, Guarded};
use crate::Route;

fn mode_for(signup: bool) -> AuthMode {
    if signup {
        AuthMode::Signup
    } else {
        AuthMode::Login
    }
}

#[component]
pub fn Login(notice: LoginNotice, signup: bool) -> Element {
    rsx! {
        Guarded {
            guard: Guard::AnonymousOnly,
            AuthPage { notice, signup }
        }
    }
}

#[component]
fn AuthPage(notice: LoginNotice, signup: bool) -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mode = mode_for(signup);

    let mut form = use_signal(AuthForm::default);
    let mut status = use_signal(FormStatus::default);
    let mut error = use_signal(move || notice.message().map(str::to_string));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut draft = form();
        draft.mode = mode;
        let submission = match draft.submission() {
            Ok(submission) => submission,
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
            let result = match &submission {
                AuthSubmission::Login(request) => api.auth().login(request).await,
                AuthSubmission::Signup(request) => api.auth().signup(request).await,
            };
            status.write().finish();
            match result {
                Ok(token) => match session.write().set_token(token) {
                    SessionChange::SignedIn => {
                        nav.replace(Route::Posts { page: 0 });
                    }
                    SessionChange::SignedOut { redirect } => {
                        nav.replace(redirect_route(redirect));
                    }
                },
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let switch_mode = move |_| {
        error.set(None);
        nav.replace(Route::Login {
            notice: LoginNotice::None,
            signup: mode.toggled() == AuthMode::Signup,
        });
    };

    rsx! {
        section {
            class: "page-narrow",
            h1 { "{mode}" }
            ErrorBanner { message: error() }
            form {
                class: "card form",
                onsubmit: onsubmit,

                label { r#for: "email", "Email:" }
                div {
                    class: "input-icon",
                    Icon { width: 16, height: 16, icon: FaEnvelope }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email address",
                        maxlength: 100,
                        value: form.read().email.clone(),
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }

                if mode == AuthMode::Signup {
                    label { r#for: "username", "Username:" }
                    div {
                        class: "input-icon",
                        Icon { width: 16, height: 16, icon: FaUser }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            maxlength: 30,
                            value: form.read().username.clone(),
                            oninput: move |evt| form.write().username = evt.value(),
                        }
                    }
                }

                label { r#for: "password", "Password:" }
                div {
                    class: "input-icon",
                    Icon { width: 16, height: 16, icon: FaKey }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        maxlength: 100,
                        value: form.read().password.clone(),
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }

                if mode == AuthMode::Signup {
                    label { r#for: "confirm-password", "Confirm Password:" }
                    div {
                        class: "input-icon",
                        Icon { width: 16, height: 16, icon: FaKey }
                        input {
                            id: "confirm-password",
                            r#type: "password",
                            placeholder: "Confirm your password",
                            maxlength: 100,
                            value: form.read().confirm_password.clone(),
                            oninput: move |evt| form.write().confirm_password = evt.value(),
                        }
                    }
                }

                button {
                    class: "btn btn-dark",
                    r#type: "submit",
                    disabled: status().is_submitting(),
                    if status().is_submitting() { "Submitting..." } else { "{mode}" }
                }
            }
            button {
                class: "link-button",
                onclick: switch_mode,
                "{mode.switch_prompt()}"
            }
        }
    }
}
