//! # Error Types
//!
//! Domain-specific error types for kitchenpos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kitchenpos-core errors (this file)                                    │
//! │  ├── CoreError        - Menu business rule violations                  │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── ErrorKind        - InvalidArgument / NotFound / StateConflict     │
//! │                                                                         │
//! │  kitchenpos-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  kitchenpos-menu errors (separate crate)                               │
//! │  └── MenuError        - What MenuService callers see                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → MenuError → transport layer       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Kinds
//! Callers branch on [`ErrorKind`], never on message text. An unknown
//! product id is `InvalidArgument` while an unknown menu group is
//! `NotFound`: the first means "you referenced the wrong kind of entity",
//! the second "this entity does not exist".

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of menu failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed or policy-violating input.
    InvalidArgument,
    /// A referenced menu group or target menu does not exist.
    NotFound,
    /// The request was well-formed but the current state forbids it.
    StateConflict,
    /// A collaborator (store, profanity service) failed.
    Collaborator,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::StateConflict => write!(f, "STATE_CONFLICT"),
            ErrorKind::Collaborator => write!(f, "COLLABORATOR"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Menu business rule errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Menu group id does not resolve.
    #[error("Menu group not found: {0}")]
    MenuGroupNotFound(String),

    /// Target menu does not exist.
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    /// A menu line references a product id the product store cannot resolve.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A menu needs at least one line item.
    #[error("Menu must contain at least one product")]
    EmptyMenuProducts,

    /// Price is higher than the value of the line items.
    ///
    /// ## Example
    /// ```text
    /// chicken 15,000 × 1 + pasta 20,000 × 1 = 35,000
    /// menu price 36,000
    ///      │
    ///      ▼
    /// PriceExceedsProducts { price: 36,000, total: 35,000 }
    /// ```
    #[error("Menu price {price} exceeds the total product value {total}")]
    PriceExceedsProducts { price: Money, total: Money },

    /// Name was flagged by the profanity checker.
    #[error("Menu name contains profanity: {0}")]
    ProfaneName(String),

    /// Menu is overpriced against live product prices and cannot be shown.
    #[error("Menu {menu_id} cannot be displayed: price {price} exceeds product value {total}")]
    MenuNotDisplayable {
        menu_id: String,
        price: Money,
        total: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::MenuGroupNotFound(_) | CoreError::MenuNotFound(_) => ErrorKind::NotFound,
            CoreError::MenuNotDisplayable { .. } => ErrorKind::StateConflict,
            CoreError::ProductNotFound(_)
            | CoreError::EmptyMenuProducts
            | CoreError::PriceExceedsProducts { .. }
            | CoreError::ProfaneName(_)
            | CoreError::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any collaborator is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range (e.g. line total overflow).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
