//! # Token persistence
//!
//! The session keeps exactly one value across reloads: the bearer token handed
//! out by `/user/login` or `/user/signup`. [`TokenStore`] is the seam between
//! the session logic and wherever that value physically lives, so the same
//! session code runs against browser `localStorage` ([`crate::LocalStorage`])
//! or an in-memory slot ([`crate::MemoryStore`]) in tests and native builds.
//!
//! The trait is synchronous. Browser storage is synchronous, and the session
//! must have persisted the token before any request that depends on it is
//! issued.
//!
//! Implementations swallow their own failures (logging at `warn`) and degrade
//! to "no token". A broken storage backend means the user has to log in again,
//! never that the page stops rendering.

/// Where the session token is persisted between page loads.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the persisted token.
    fn clear(&self);
}

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Backend(String),
}
