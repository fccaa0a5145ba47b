//! Form drafts and the small state machines around them.
//!
//! Each draft validates into the request payload it would send, or into
//! [`Submit::Unchanged`] when the edit would not change anything and the flow
//! should close without a request. Views hold drafts in signals and only call
//! the API after validation passes.

mod account;
mod auth;
mod post;
pub mod validate;

pub use account::{AdminUserForm, EmailForm, PasswordForm, UsernameForm};
pub use auth::{AuthForm, AuthMode, AuthSubmission};
pub use post::PostForm;
pub use validate::ValidationError;

use api::{CommentPayload, Id};

/// Result of a valid draft: either nothing to send, or the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Submit<T> {
    Unchanged,
    Send(T),
}

/// Whether a form's request is in flight. Submit controls are disabled while
/// `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Enter `Submitting` unless a request is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = FormStatus::Submitting;
        true
    }

    pub fn finish(&mut self) {
        *self = FormStatus::Idle;
    }
}

/// A destructive action waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation<T> {
    pending: Option<T>,
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Confirmation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Close the dialog and hand back what was confirmed.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// Row-level edit mode: at most one item of a list is edited at a time, and
/// at most one save of it is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEdit<D> {
    target: Option<Id>,
    draft: D,
    status: FormStatus,
}

impl<D: Default> Default for InlineEdit<D> {
    fn default() -> Self {
        Self {
            target: None,
            draft: D::default(),
            status: FormStatus::Idle,
        }
    }
}

impl<D: Default> InlineEdit<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, target: Id, draft: D) {
        self.target = Some(target);
        self.draft = draft;
    }

    pub fn close(&mut self) {
        self.target = None;
        self.draft = D::default();
        self.status.finish();
    }

    /// Start saving the open row. `None` when nothing is open or a save of it
    /// is already running.
    pub fn begin_save(&mut self) -> Option<Id> {
        let target = self.target.clone()?;
        self.status.try_begin().then_some(target)
    }

    /// The save ended without closing the editor.
    pub fn finish_save(&mut self) {
        self.status.finish();
    }

    pub fn is_saving(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn is_editing(&self, id: &Id) -> bool {
        self.target.as_ref() == Some(id)
    }

    pub fn target(&self) -> Option<&Id> {
        self.target.as_ref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }
}

/// Validate an edited comment against its current text.
pub fn comment_edit(current: &str, draft: &str) -> Result<Submit<CommentPayload>, ValidationError> {
    if current == draft {
        return Ok(Submit::Unchanged);
    }
    validate::comment_text(draft)?;
    Ok(Submit::Send(CommentPayload {
        text: draft.to_string(),
    }))
}

/// Validate a new comment.
pub fn new_comment(draft: &str) -> Result<CommentPayload, ValidationError> {
    validate::comment_text(draft)?;
    Ok(CommentPayload {
        text: draft.to_string(),
    })
}
