//! Data models exchanged with the blog REST API.

mod comment;
mod id;
mod post;
mod user;

pub use comment::{Comment, CommentPayload, CommentRecord, PostRef};
pub use id::{HasId, Id};
pub use post::{Post, PostPayload, PostRecord};
pub use user::{AccountUpdate, AdminUserUpdate, AuthResponse, AuthorRef, LoginRequest, SignupRequest, User};
