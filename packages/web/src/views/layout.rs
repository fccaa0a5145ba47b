use dioxus::prelude::*;

use ui::{use_session, Guard, LoginNotice, LogoutButton, Navbar};

use super::guard::{redirect_route, Guarded};
use crate::Route;

/// Header, page body and footer around every route.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let signed_in = session.read().is_authenticated();

    rsx! {
        Navbar {
            brand: rsx! {
                Link { to: Route::Posts { page: 0 }, "Travel Blog" }
            },
            Link { to: Route::Posts { page: 0 }, "Posts" }
            if signed_in {
                Link { to: Route::DashboardAccount {}, "Dashboard" }
                LogoutButton {
                    on_signed_out: move |to: ui::Redirect| {
                        nav.replace(redirect_route(to));
                    },
                }
            } else {
                Link {
                    to: Route::Login { notice: LoginNotice::None, signup: false },
                    "Login"
                }
                Link {
                    class: "signup-link",
                    to: Route::Login { notice: LoginNotice::None, signup: true },
                    "Sign Up"
                }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        footer {
            class: "footer",
            "Travel Blog"
        }
    }
}

/// Dashboard tabs. The whole dashboard needs a signed-in user; the users tab
/// is only listed for admins.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let is_admin = session.read().is_admin();

    let tab = |target: &Route| {
        if std::mem::discriminant(target) == std::mem::discriminant(&route) {
            "dashboard-tab active"
        } else {
            "dashboard-tab"
        }
    };
    let account = Route::DashboardAccount {};
    let comments = Route::DashboardComments { page: 0 };
    let users = Route::DashboardUsers { page: 0 };

    rsx! {
        Guarded {
            guard: Guard::AuthenticatedOnly,
            div {
                class: "dashboard",
                nav {
                    class: "dashboard-tabs",
                    Link { class: tab(&account), to: account.clone(), "Account" }
                    Link { class: tab(&comments), to: comments.clone(), "User Comments" }
                    if is_admin {
                        Link { class: tab(&users), to: users.clone(), "Users" }
                    }
                }
                div {
                    class: "dashboard-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
