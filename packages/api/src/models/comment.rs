use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorRef, HasId, Id};

/// A comment as returned inside a post or by the comment listings.
///
/// `post` is only present on `/comment` and `/comment/author/:id` results,
/// where the dashboard needs the post title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id,
    pub text: String,
    pub author: AuthorRef,
    #[serde(default)]
    pub post: Option<PostRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_edited(&self) -> bool {
        self.created_at != self.updated_at
    }

    /// Title of the commented post, empty when the listing omitted it.
    pub fn post_title(&self) -> &str {
        self.post.as_ref().map(|p| p.title.as_str()).unwrap_or("")
    }

    /// Apply an update response, keeping author and post references.
    pub fn apply_record(&mut self, record: &CommentRecord) {
        self.text = record.text.clone();
        self.updated_at = record.updated_at;
    }

    /// Build the local entry for a freshly created comment. The create
    /// response carries only the author id, so the display name comes from
    /// the session.
    pub fn from_created(record: CommentRecord, author_name: impl Into<String>) -> Self {
        Comment {
            id: record.id,
            text: record.text,
            author: AuthorRef {
                id: record.author_id,
                name: author_name.into(),
            },
            post: None,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl HasId for Comment {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// Reference to the post a comment belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRef {
    #[serde(default)]
    pub id: Option<Id>,
    pub title: String,
}

/// A comment row as returned by create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: Id,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or editing a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub text: String,
}
