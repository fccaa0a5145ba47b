use std::sync::{Arc, RwLock};

/// The authorization credential attached to outgoing requests.
///
/// One `Credential` is shared between the session (which attaches and detaches
/// it) and every [`crate::ApiClient`] clone (which reads it whenever a request
/// is built). Attaching takes effect for the very next request.
#[derive(Clone, Debug, Default)]
pub struct Credential {
    value: Arc<RwLock<Option<String>>>,
}

impl Credential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `token` to all subsequent requests.
    pub fn attach(&self, token: &str) {
        let mut slot = self.value.write().unwrap_or_else(|p| p.into_inner());
        *slot = Some(token.to_string());
    }

    /// Stop attaching any credential.
    pub fn detach(&self) {
        let mut slot = self.value.write().unwrap_or_else(|p| p.into_inner());
        *slot = None;
    }

    /// The header value to send, if a credential is attached.
    pub fn current(&self) -> Option<String> {
        self.value
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn is_attached(&self) -> bool {
        self.current().is_some()
    }
}
