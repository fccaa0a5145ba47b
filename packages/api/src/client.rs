use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credential::Credential;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::Id;
use crate::resources::{Auth, Comments, PostComments, Posts, Users};

/// HTTP client for the blog REST API.
///
/// Cheap to clone: clones share the connection pool and the [`Credential`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credential,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Start a request for `endpoint`, with the credential attached if the
    /// session currently holds one.
    pub fn build(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let builder = self.http.request(endpoint.method(), url);
        match self.credential.current() {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }

    async fn execute(
        &self,
        endpoint: &Endpoint<'_>,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ApiError::from(e);
                tracing::error!(
                    "{} {} failed: {}",
                    endpoint.method(),
                    endpoint.path(),
                    err
                );
                return Err(err);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::error!(
            "{} {} returned {}: {}",
            endpoint.method(),
            endpoint.path(),
            status.as_u16(),
            err
        );
        Err(err)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<T, ApiError> {
        let response = self.execute(&endpoint, self.build(&endpoint)).await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.build(&endpoint).json(body);
        let response = self.execute(&endpoint, builder).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a body and ignore whatever the server answers with.
    pub(crate) async fn send_discarding<B: Serialize>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.build(&endpoint).json(body);
        self.execute(&endpoint, builder).await?;
        Ok(())
    }

    /// Send a request whose response body is irrelevant.
    pub(crate) async fn send_empty(&self, endpoint: Endpoint<'_>) -> Result<(), ApiError> {
        self.execute(&endpoint, self.build(&endpoint)).await?;
        Ok(())
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts::new(self)
    }

    pub fn post_comments<'a>(&'a self, post_id: &'a Id) -> PostComments<'a> {
        PostComments::new(self, post_id)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test/", Credential::new())
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client();
        let request = client.build(&Endpoint::AllPosts).build().unwrap();
        assert_eq!(request.url().as_str(), "http://api.test/post/all");
        assert_eq!(request.method(), Method::GET);
    }

    #[test]
    fn test_anonymous_request_has_no_authorization() {
        let request = client().build(&Endpoint::PublishedPosts).build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_attached_credential_is_sent_on_next_request() {
        let client = client();
        client.credential().attach("header.payload.sig");

        let id = Id::new("9");
        let request = client.build(&Endpoint::DeleteUser(&id)).build().unwrap();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "header.payload.sig"
        );
    }

    #[test]
    fn test_detached_credential_is_not_sent() {
        let credential = Credential::new();
        let client = ApiClient::new("http://api.test", credential.clone());
        credential.attach("tok");
        credential.detach();

        let request = client.build(&Endpoint::Users).build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1", Credential::new());
        let err = client.posts().list().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
