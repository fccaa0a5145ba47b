//! Per-resource handles over [`crate::ApiClient`].
//!
//! Each handle borrows the client and exposes the operations the backend
//! offers for that resource, named `list` / `get` / `create` / `update` /
//! `remove` where they apply. Nothing here retries or touches local state.

mod auth;
mod comments;
mod posts;
mod users;

pub use auth::Auth;
pub use comments::{Comments, PostComments};
pub use posts::Posts;
pub use users::Users;
