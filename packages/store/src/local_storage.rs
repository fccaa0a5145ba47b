//! # Browser `localStorage` token store
//!
//! [`LocalStorage`] is the [`TokenStore`] used on the **web platform**. The token
//! is kept under a single key (default `"token"`, configurable through
//! [`crate::BlogConfig`]) in `window.localStorage`, so it survives reloads and is
//! shared between tabs of the same origin.
//!
//! ## Error handling
//!
//! Every browser call can fail (storage disabled, quota exceeded, private mode).
//! Failures are logged at `warn` and otherwise ignored: a read failure looks
//! like an anonymous visitor, a write failure means the token is not remembered
//! across reloads.

use crate::token::{StorageError, TokenStore};

const DEFAULT_KEY: &str = "token";

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Store the token under the default `"token"` key.
    pub fn new() -> Self {
        Self::with_key(DEFAULT_KEY)
    }

    /// Store the token under a custom key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    fn try_load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn try_save(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn try_clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        match self.try_load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read token from localStorage: {}", e);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = self.try_save(token) {
            tracing::warn!("Failed to persist token to localStorage: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::warn!("Failed to remove token from localStorage: {}", e);
        }
    }
}
