//! Typed errors returned by every service call.
//!
//! The message shown to users is the backend's `detail` field when there is
//! one, otherwise a fixed fallback for the [`Operation`] that failed.

use reqwest::StatusCode;
use serde_json::Value;
use store::config::{ErrorSurface, ErrorSurfaces};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response (connect, DNS, decode).
    Network,
    /// The backend rejected the input (400, 409, 422).
    Validation,
    /// The token is missing, stale, or not allowed (401, 403).
    Unauthorized,
    /// Any other non-success status.
    Server,
}

impl ErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 | 409 | 422 => ErrorKind::Validation,
            401 | 403 => ErrorKind::Unauthorized,
            _ => ErrorKind::Server,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, when the backend answered.
    pub status: Option<u16>,
}

/// The service call an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    SignUp,
    SignIn,
    FetchNotes,
    FetchNote,
    CreateNote,
    UpdateNote,
    DeleteNote,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::SignUp => "Sign up failed",
            Operation::SignIn => "Sign in failed",
            Operation::FetchNotes => "Failed to fetch notes",
            Operation::FetchNote => "Failed to fetch note",
            Operation::CreateNote => "Failed to create note",
            Operation::UpdateNote => "Failed to update note",
            Operation::DeleteNote => "Failed to delete note",
        }
    }

    /// Where a failure of this operation is shown, per the client config.
    pub fn surface(self, surfaces: &ErrorSurfaces) -> ErrorSurface {
        match self {
            Operation::SignUp => surfaces.sign_up,
            Operation::SignIn => surfaces.sign_in,
            Operation::FetchNotes | Operation::FetchNote => surfaces.fetch,
            Operation::CreateNote => surfaces.create,
            Operation::UpdateNote => surfaces.update,
            Operation::DeleteNote => surfaces.delete,
        }
    }
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// Transport or decode failure. The underlying error is logged, the user
    /// sees the operation's fallback.
    pub(crate) fn network(op: Operation, err: &reqwest::Error) -> Self {
        tracing::warn!("{:?} request failed: {}", op, err);
        Self::new(ErrorKind::Network, op.fallback_message())
    }

    /// Build an error from a non-success status and its raw body.
    pub fn from_status(op: Operation, status: StatusCode, body: &str) -> Self {
        let message = detail_message(body).unwrap_or_else(|| op.fallback_message().to_string());
        tracing::warn!("{:?} failed with {}: {}", op, status, message);
        Self {
            kind: ErrorKind::from_status(status),
            message,
            status: Some(status.as_u16()),
        }
    }
}

/// Pull a user-facing message out of an error body.
///
/// Accepts `{"detail": "text"}` and FastAPI's validation shape
/// `{"detail": [{"msg": "text", ...}]}`.
fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match value.get("detail")? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.first()?.get("msg")?.as_str()?.to_string(),
        _ => return None,
    };
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}
