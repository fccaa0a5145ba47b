use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{AccountUpdate, AdminUserUpdate, Id, User};

/// User accounts.
pub struct Users<'a> {
    client: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every account (admin).
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.fetch(Endpoint::Users).await
    }

    /// Change the caller's own account. The session token still carries the
    /// old claims afterwards, so callers sign out after name/email changes.
    pub async fn update(&self, id: &Id, payload: &AccountUpdate) -> Result<(), ApiError> {
        self.client
            .send_discarding(Endpoint::UpdateUser(id), payload)
            .await
    }

    /// Change another account's name, email or admin flag (admin).
    pub async fn update_as_admin(
        &self,
        id: &Id,
        payload: &AdminUserUpdate,
    ) -> Result<User, ApiError> {
        self.client.send(Endpoint::UpdateUserAsAdmin(id), payload).await
    }

    pub async fn remove(&self, id: &Id) -> Result<(), ApiError> {
        self.client.send_empty(Endpoint::DeleteUser(id)).await
    }
}
