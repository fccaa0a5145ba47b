use dioxus::prelude::*;

use ui::{use_guard, Guard, GuardDecision, LoginNotice, Redirect};

use crate::Route;

pub(crate) fn redirect_route(to: Redirect) -> Route {
    match to {
        Redirect::Posts => Route::Posts { page: 0 },
        Redirect::Login(notice) => Route::Login {
            notice,
            signup: false,
        },
    }
}

pub(crate) fn login_route(notice: LoginNotice) -> Route {
    redirect_route(Redirect::Login(notice))
}

/// Renders `children` only when `guard` allows the current session;
/// otherwise replaces the history entry with the redirect target.
#[component]
pub fn Guarded(guard: Guard, children: Element) -> Element {
    let nav = use_navigator();

    match use_guard(guard) {
        GuardDecision::Allow => rsx! {
            {children}
        },
        GuardDecision::Redirect(to) => {
            nav.replace(redirect_route(to));
            rsx! {}
        }
    }
}
