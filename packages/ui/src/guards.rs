//! # Route guards
//!
//! Navigation-time access checks. Each guard is a pure function of the
//! session's `(token, user)` pair and either allows the page to render or names
//! where to send the visitor instead. Guards never fetch and never mutate the
//! session; they are evaluated on every render of the guarded page.
//!
//! | Guard | Allows | Otherwise |
//! |-------|--------|-----------|
//! | [`Guard::AdminOnly`] | a decoded user with `isAdmin` | posts listing |
//! | [`Guard::AuthenticatedOnly`] | any decoded user | posts listing if a token is held but not (yet) decoded, else login with [`LoginNotice::LoginRequired`] |
//! | [`Guard::AnonymousOnly`] | no user and no token | posts listing |

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::session::SessionUser;

/// Advisory shown on the login page after a redirect.
///
/// Travels in the login URL as a short code so the page can be reloaded or
/// shared without losing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginNotice {
    #[default]
    None,
    LoginRequired,
    UsernameChanged,
    EmailChanged,
}

impl LoginNotice {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoginNotice::None => None,
            LoginNotice::LoginRequired => Some("You must log in first."),
            LoginNotice::UsernameChanged => Some("Username changed. Please log in again."),
            LoginNotice::EmailChanged => Some("Email changed. Please log in again."),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            LoginNotice::None => "",
            LoginNotice::LoginRequired => "login-required",
            LoginNotice::UsernameChanged => "username-changed",
            LoginNotice::EmailChanged => "email-changed",
        }
    }
}

impl fmt::Display for LoginNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LoginNotice {
    type Err = Infallible;

    /// Unknown codes read as no notice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "login-required" => LoginNotice::LoginRequired,
            "username-changed" => LoginNotice::UsernameChanged,
            "email-changed" => LoginNotice::EmailChanged,
            _ => LoginNotice::None,
        })
    }
}

/// Where a refused or finished flow sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The public posts listing, first page.
    Posts,
    Login(LoginNotice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    AdminOnly,
    AuthenticatedOnly,
    AnonymousOnly,
}

impl Guard {
    pub fn evaluate(&self, token: Option<&str>, user: Option<&SessionUser>) -> GuardDecision {
        match self {
            Guard::AdminOnly => admin_only(user),
            Guard::AuthenticatedOnly => authenticated_only(token, user),
            Guard::AnonymousOnly => anonymous_only(token, user),
        }
    }
}

pub fn admin_only(user: Option<&SessionUser>) -> GuardDecision {
    match user {
        Some(u) if u.is_admin => GuardDecision::Allow,
        _ => GuardDecision::Redirect(Redirect::Posts),
    }
}

pub fn authenticated_only(token: Option<&str>, user: Option<&SessionUser>) -> GuardDecision {
    match (user, token) {
        (Some(_), _) => GuardDecision::Allow,
        (None, Some(_)) => GuardDecision::Redirect(Redirect::Posts),
        (None, None) => GuardDecision::Redirect(Redirect::Login(LoginNotice::LoginRequired)),
    }
}

pub fn anonymous_only(token: Option<&str>, user: Option<&SessionUser>) -> GuardDecision {
    if user.is_none() && token.is_none() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Redirect::Posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Id;

    fn user(is_admin: bool) -> SessionUser {
        SessionUser {
            id: Id::new("1"),
            name: "ana".into(),
            email: "ana@example.com".into(),
            is_admin,
            exp: 4_102_444_800,
        }
    }

    #[test]
    fn test_admin_only_requires_admin_flag() {
        let admin = user(true);
        let reader = user(false);
        assert!(admin_only(Some(&admin)).is_allowed());
        assert_eq!(
            admin_only(Some(&reader)),
            GuardDecision::Redirect(Redirect::Posts)
        );
        assert_eq!(admin_only(None), GuardDecision::Redirect(Redirect::Posts));
    }

    #[test]
    fn test_admin_only_ignores_token_without_user() {
        assert_eq!(
            Guard::AdminOnly.evaluate(Some("tok"), None),
            GuardDecision::Redirect(Redirect::Posts)
        );
    }

    #[test]
    fn test_authenticated_only_branches() {
        let reader = user(false);
        assert!(authenticated_only(Some("tok"), Some(&reader)).is_allowed());
        assert_eq!(
            authenticated_only(Some("tok"), None),
            GuardDecision::Redirect(Redirect::Posts)
        );
        assert_eq!(
            authenticated_only(None, None),
            GuardDecision::Redirect(Redirect::Login(LoginNotice::LoginRequired))
        );
    }

    #[test]
    fn test_anonymous_only_needs_neither_user_nor_token() {
        let reader = user(false);
        assert!(anonymous_only(None, None).is_allowed());
        assert!(!anonymous_only(Some("tok"), None).is_allowed());
        assert!(!anonymous_only(Some("tok"), Some(&reader)).is_allowed());
    }

    #[test]
    fn test_login_notice_codes() {
        for notice in [
            LoginNotice::None,
            LoginNotice::LoginRequired,
            LoginNotice::UsernameChanged,
            LoginNotice::EmailChanged,
        ] {
            assert_eq!(notice.to_string().parse::<LoginNotice>().unwrap(), notice);
        }
        assert_eq!("bogus".parse::<LoginNotice>().unwrap(), LoginNotice::None);
        assert_eq!(
            LoginNotice::LoginRequired.message(),
            Some("You must log in first.")
        );
        assert_eq!(LoginNotice::None.message(), None);
    }
}
