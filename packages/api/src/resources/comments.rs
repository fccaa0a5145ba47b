use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{Comment, CommentPayload, CommentRecord, Id};

/// Comments across all posts, as managed from the dashboard.
pub struct Comments<'a> {
    client: &'a ApiClient,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every comment (admin).
    pub async fn list(&self) -> Result<Vec<Comment>, ApiError> {
        self.client.fetch(Endpoint::Comments).await
    }

    /// Comments written by one author.
    pub async fn list_by_author(&self, author: &Id) -> Result<Vec<Comment>, ApiError> {
        self.client.fetch(Endpoint::CommentsByAuthor(author)).await
    }

    pub async fn update(
        &self,
        id: &Id,
        payload: &CommentPayload,
    ) -> Result<CommentRecord, ApiError> {
        self.client.send(Endpoint::UpdateComment(id), payload).await
    }

    pub async fn remove(&self, id: &Id) -> Result<(), ApiError> {
        self.client.send_empty(Endpoint::DeleteComment(id)).await
    }
}

/// Comments of a single post, as managed from the post page.
pub struct PostComments<'a> {
    client: &'a ApiClient,
    post_id: &'a Id,
}

impl<'a> PostComments<'a> {
    pub(crate) fn new(client: &'a ApiClient, post_id: &'a Id) -> Self {
        Self { client, post_id }
    }

    pub async fn create(&self, payload: &CommentPayload) -> Result<CommentRecord, ApiError> {
        self.client
            .send(Endpoint::CreatePostComment(self.post_id), payload)
            .await
    }

    pub async fn update(
        &self,
        id: &Id,
        payload: &CommentPayload,
    ) -> Result<CommentRecord, ApiError> {
        self.client
            .send(Endpoint::UpdatePostComment(self.post_id, id), payload)
            .await
    }

    pub async fn remove(&self, id: &Id) -> Result<(), ApiError> {
        self.client
            .send_empty(Endpoint::DeletePostComment(self.post_id, id))
            .await
    }
}
