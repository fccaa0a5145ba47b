//! Field validators matching the limits the backend enforces.
//!
//! Lengths are counted in characters. Each check returns the first failing
//! rule as a [`ValidationError`]; nothing here talks to the network.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title must be between 1 and 200 characters.")]
    Title,

    #[error("Text must be between 1 and 10000 characters.")]
    Text,

    #[error("Url cannot exceed 200 characters.")]
    ImageUrl,

    #[error("Comment text must be between 1 and 1000 characters.")]
    CommentText,

    #[error("Incorrect email value. Email cannot exceed 100 characters.")]
    Email,

    #[error("Password must be between 6 and 100 characters.")]
    Password,

    #[error("Username must be between 3 and 30 characters.")]
    Username,

    #[error("Passwords don't match.")]
    PasswordMismatch,

    #[error("Emails don't match.")]
    EmailMismatch,
}

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!("Invalid email pattern: {}", e);
                None
            }
        })
        .as_ref()
}

fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn post_title(value: &str) -> Result<(), ValidationError> {
    within(value, 1, 200).then_some(()).ok_or(ValidationError::Title)
}

pub fn post_text(value: &str) -> Result<(), ValidationError> {
    within(value, 1, 10_000).then_some(()).ok_or(ValidationError::Text)
}

pub fn image_url(value: &str) -> Result<(), ValidationError> {
    within(value, 0, 200).then_some(()).ok_or(ValidationError::ImageUrl)
}

pub fn comment_text(value: &str) -> Result<(), ValidationError> {
    within(value, 1, 1000)
        .then_some(())
        .ok_or(ValidationError::CommentText)
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    let pattern_ok = email_regex().is_some_and(|re| re.is_match(value));
    if within(value, 1, 100) && !value.contains(' ') && pattern_ok {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if within(value, 6, 100) && !value.contains(' ') {
        Ok(())
    } else {
        Err(ValidationError::Password)
    }
}

pub fn username(value: &str) -> Result<(), ValidationError> {
    within(value, 3, 30)
        .then_some(())
        .ok_or(ValidationError::Username)
}
