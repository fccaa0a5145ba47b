use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native builds.
///
/// Clones share the same slot, so a test can hand one clone to the session and
/// inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if persisted by an earlier visit.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        match self.token.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, token: &str) {
        match self.token.lock() {
            Ok(mut slot) => *slot = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn clear(&self) {
        match self.token.lock() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        store.save("abc.def.ghi");
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));

        // Saving again replaces the previous token
        store.save("second");
        assert_eq!(store.load().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_removes_token() {
        let store = MemoryStore::with_token("persisted");
        assert!(store.load().is_some());

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.save("shared");
        assert_eq!(observer.load().as_deref(), Some("shared"));

        observer.clear();
        assert!(store.load().is_none());
    }
}
