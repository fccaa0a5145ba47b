//! # Post models
//!
//! Two representations of a blog post cross the wire:
//!
//! - [`Post`]: what list and detail endpoints return. Carries the author
//!   reference and, on detail endpoints, the ordered comment thread.
//! - [`PostRecord`]: the bare row returned by `POST /post` and `PUT /post/:id`.
//!   Callers merge the fields they need (`isPublished`, `updatedAt`) into the
//!   [`Post`] they already hold.
//!
//! [`PostPayload`] is the request body for both create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorRef, Comment, HasId, Id};

/// A post as returned by list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author: AuthorRef,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Whether the post was modified after creation.
    pub fn is_edited(&self) -> bool {
        self.created_at != self.updated_at
    }

    /// Apply a mutation response to this post, keeping author and comments.
    pub fn apply_record(&mut self, record: &PostRecord) {
        self.title = record.title.clone();
        self.text = record.text.clone();
        self.image_url = record.image_url.clone();
        self.is_published = record.is_published;
        self.updated_at = record.updated_at;
    }

    /// Payload that re-submits the post unchanged except for its publish flag.
    pub fn publish_toggle_payload(&self) -> PostPayload {
        PostPayload {
            title: self.title.clone(),
            text: self.text.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
            is_published: !self.is_published,
        }
    }
}

impl HasId for Post {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// A post row as returned by create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Id,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /post` and `PUT /post/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    pub text: String,
    pub image_url: String,
    pub is_published: bool,
}
