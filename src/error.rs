//! Error types used by the bus, the debouncer and note persistence.
//!
//! This module defines three error enums:
//!
//! - [`HandlerError`]: raised by bus handlers and returned from [`Bus::dispatch`](crate::Bus::dispatch).
//! - [`ActionError`]: raised by a debounced action when its timer fires.
//! - [`StoreError`]: raised by a [`NoteStore`](crate::NoteStore) collaborator.
//!
//! All of them provide `as_label` (stable snake_case, for logs) and `as_message`.

use std::borrow::Cow;

use thiserror::Error;

/// # Errors produced by event handlers.
///
/// The bus never catches these: whatever a handler returns is handed back to the
/// caller of [`Bus::dispatch`](crate::Bus::dispatch) unchanged.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The event did not carry the payload this handler needs.
    #[error("event {event:?} is missing its payload")]
    MissingPayload {
        /// Name of the event that was dispatched.
        event: String,
    },

    /// The handler ran and reported a failure.
    #[error("handler {handler} failed: {error}")]
    Failed {
        /// Name of the failing handler.
        handler: Cow<'static, str>,
        /// The underlying error message.
        error: String,
    },
}

impl HandlerError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use flashkit::HandlerError;
    ///
    /// let err = HandlerError::MissingPayload { event: "Flash.showMessage".into() };
    /// assert_eq!(err.as_label(), "handler_missing_payload");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::MissingPayload { .. } => "handler_missing_payload",
            HandlerError::Failed { .. } => "handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::MissingPayload { event } => format!("missing payload: {event}"),
            HandlerError::Failed { handler, error } => format!("{handler}: {error}"),
        }
    }
}

/// # Errors produced by a persistence collaborator.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered but refused the request; `message` is user-facing.
    #[error("rejected: {message}")]
    Rejected {
        /// Message returned by the store.
        message: String,
    },

    /// No note exists under the given id.
    #[error("note {id:?} not found")]
    NotFound {
        /// The requested note id.
        id: String,
    },

    /// The store could not be reached at all.
    #[error("store unavailable: {error}")]
    Unavailable {
        /// The underlying transport error.
        error: String,
    },
}

impl StoreError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            StoreError::Rejected { .. } => "store_rejected",
            StoreError::NotFound { .. } => "store_not_found",
            StoreError::Unavailable { .. } => "store_unavailable",
        }
    }

    /// Returns the text suitable for showing to the user, if the store gave one.
    ///
    /// Transport failures have nothing to show; those are only logged.
    pub fn user_message(&self) -> Option<String> {
        match self {
            StoreError::Rejected { message } => Some(message.clone()),
            StoreError::NotFound { id } => Some(format!("note {id} does not exist")),
            StoreError::Unavailable { .. } => None,
        }
    }
}

/// # Errors produced by debounced actions.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action ran and failed.
    #[error("action failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The action panicked; the panic was caught by the timer task.
    #[error("action panicked: {info}")]
    Panicked {
        /// Panic payload, if it was a string.
        info: String,
    },

    /// The action failed while talking to the note store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use flashkit::{ActionError, StoreError};
    ///
    /// let err = ActionError::from(StoreError::Rejected { message: "too long".into() });
    /// assert_eq!(err.as_label(), "store_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ActionError::Fail { .. } => "action_failed",
            ActionError::Panicked { .. } => "action_panicked",
            ActionError::Store(e) => e.as_label(),
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ActionError::Fail { error } => format!("error: {error}"),
            ActionError::Panicked { info } => format!("panic: {info}"),
            ActionError::Store(e) => format!("store: {e}"),
        }
    }
}
