use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest};

/// Token exchange. Both calls return the bearer token for the session.
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response: AuthResponse = self.client.send(Endpoint::Login, request).await?;
        Ok(response.token)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        let response: AuthResponse = self.client.send(Endpoint::Signup, request).await?;
        Ok(response.token)
    }
}
