//! # API crate: REST client for the travel blog backend
//!
//! This crate is the only place the frontend talks to the network. It holds the
//! wire models, the endpoint table, and a thin `reqwest` client that attaches the
//! session credential and normalizes failures into one displayable message.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Posts, comments, users and the request/response bodies exchanged with the backend |
//! | [`endpoint`] | The REST surface as one enum: HTTP method and path per operation |
//! | [`credential`] | Shared `Authorization` value, attached/detached by the session |
//! | [`client`] | [`ApiClient`]: builds requests, sends them, decodes JSON, normalizes errors |
//! | [`resources`] | Per-resource handles (`posts`, `post_comments`, `comments`, `users`, `auth`) |
//! | [`error`] | [`ApiError`] and its message precedence |
//!
//! ## Behaviour shared by every call
//!
//! - The credential is read when the request is built, so a token attached by
//!   the session is sent on the very next call.
//! - Nothing retries. A failure is returned once, logged at `error`, and the
//!   caller decides what to show; local state is only patched after success.
//! - No timeout beyond the transport's default and no cancellation.

pub mod client;
pub mod credential;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod resources;

pub use client::ApiClient;
pub use credential::Credential;
pub use endpoint::Endpoint;
pub use error::{ApiError, UNEXPECTED_ERROR};
pub use models::{
    AccountUpdate, AdminUserUpdate, AuthorRef, Comment, CommentPayload, CommentRecord, HasId, Id,
    LoginRequest, Post, PostPayload, PostRecord, PostRef, SignupRequest, User,
};
