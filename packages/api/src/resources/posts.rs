use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{Id, Post, PostPayload, PostRecord};

/// Blog posts.
pub struct Posts<'a> {
    client: &'a ApiClient,
}

impl<'a> Posts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Published posts, as any visitor sees them.
    pub async fn list(&self) -> Result<Vec<Post>, ApiError> {
        self.client.fetch(Endpoint::PublishedPosts).await
    }

    /// Every post including unpublished ones (admin).
    pub async fn list_all(&self) -> Result<Vec<Post>, ApiError> {
        self.client.fetch(Endpoint::AllPosts).await
    }

    /// Pick the listing appropriate for the viewer.
    pub async fn list_for(&self, is_admin: bool) -> Result<Vec<Post>, ApiError> {
        if is_admin {
            self.list_all().await
        } else {
            self.list().await
        }
    }

    /// A published post with its comments.
    pub async fn get(&self, id: &Id) -> Result<Post, ApiError> {
        self.client.fetch(Endpoint::Post(id)).await
    }

    /// Any post with its comments, published or not (admin).
    pub async fn get_admin(&self, id: &Id) -> Result<Post, ApiError> {
        self.client.fetch(Endpoint::PostAdmin(id)).await
    }

    pub async fn get_for(&self, id: &Id, is_admin: bool) -> Result<Post, ApiError> {
        if is_admin {
            self.get_admin(id).await
        } else {
            self.get(id).await
        }
    }

    pub async fn create(&self, payload: &PostPayload) -> Result<PostRecord, ApiError> {
        self.client.send(Endpoint::CreatePost, payload).await
    }

    pub async fn update(&self, id: &Id, payload: &PostPayload) -> Result<PostRecord, ApiError> {
        self.client.send(Endpoint::UpdatePost(id), payload).await
    }

    pub async fn remove(&self, id: &Id) -> Result<(), ApiError> {
        self.client.send_empty(Endpoint::DeletePost(id)).await
    }
}
