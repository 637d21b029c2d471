//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sqlx::Error / MigrateError                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module)        constraint failures told apart from       │
//! │       │                       connection and pool failures              │
//! │       ▼                                                                 │
//! │  StoreError::Db (kitchenpos-menu)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MenuError::Store             ErrorKind::Collaborator                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups that find nothing return `Ok(None)`, so there is no not-found
//! variant here. Absence is for the menu service to interpret.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A row references a menu group or product that is not stored.
    ///
    /// The schema is the last line of defense: the menu service resolves
    /// every reference before it writes.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// A negative price or quantity reached SQL.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected the statement for a reason other than a constraint.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No connection became free within the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => classify(db_err.message()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Sorts a SQLite error message into a variant.
///
/// SQLite reports `FOREIGN KEY constraint failed` and
/// `CHECK constraint failed: <expr>`.
fn classify(message: &str) -> DbError {
    let message = message.to_string();
    if message.contains("FOREIGN KEY constraint failed") {
        DbError::ForeignKeyViolation { message }
    } else if message.contains("CHECK constraint failed") {
        DbError::ConstraintViolation { message }
    } else {
        DbError::QueryFailed(message)
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
