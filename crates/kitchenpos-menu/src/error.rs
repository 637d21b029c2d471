//! # Menu Service Errors
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──► CoreError ──────────────┐                          │
//! │                                               ▼                          │
//! │                                          MenuError ──► transport layer  │
//! │                                               ▲                          │
//! │  DbError ──► StoreError ─────────────────────┘                          │
//! │  reqwest::Error ──┘                                                     │
//! │                                                                         │
//! │  MenuError::kind()                                                      │
//! │    Domain(e) → e.kind()  (InvalidArgument / NotFound / StateConflict)   │
//! │    Store(_)  → Collaborator                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use kitchenpos_core::{CoreError, ErrorKind, ValidationError};
use kitchenpos_db::DbError;

/// Result type alias for collaborator calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for [`MenuService`](crate::MenuService) operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// A collaborator call failed.
///
/// Never retried: the service hands it straight back to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite store failed.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// The profanity checker failed or answered with something unreadable.
    #[error("Profanity check failed: {0}")]
    Profanity(String),

    /// The collaborator is not reachable.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            StoreError::Unavailable(err.to_string())
        } else {
            StoreError::Profanity(err.to_string())
        }
    }
}

/// Error returned by every menu operation.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A menu rule rejected the request.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A collaborator failed; nothing was written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MenuError {
    /// Classifies the error for the transport layer.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::Domain(err) => err.kind(),
            MenuError::Store(_) => ErrorKind::Collaborator,
        }
    }

    /// The domain error, if this is one.
    pub fn as_domain(&self) -> Option<&CoreError> {
        match self {
            MenuError::Domain(err) => Some(err),
            MenuError::Store(_) => None,
        }
    }
}

impl From<ValidationError> for MenuError {
    fn from(err: ValidationError) -> Self {
        MenuError::Domain(CoreError::Validation(err))
    }
}

impl From<DbError> for MenuError {
    fn from(err: DbError) -> Self {
        MenuError::Store(StoreError::Db(err))
    }
}
