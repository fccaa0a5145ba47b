//! This crate contains the client-side logic and shared UI of the blog.
//!
//! The pure modules ([`session`], [`guards`], [`pagination`],
//! [`comment_filter`], [`forms`], [`lists`], [`format`]) hold every decision
//! the pages make and are tested without a renderer. The components wire them
//! to Dioxus signals and context.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

pub mod comment_filter;
pub mod format;
pub mod forms;
pub mod guards;
pub mod lists;
pub mod pagination;
pub mod session;

pub use guards::{Guard, GuardDecision, LoginNotice, Redirect};
pub use pagination::PageWindow;
pub use session::{SessionChange, SessionStore, SessionUser, TokenError};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{
    use_api, use_config, use_guard, use_session, LogoutButton, PlatformStore, Session,
    SessionProvider,
};
