//! # Validation Module
//!
//! Input validation for menu requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (out of scope)                                     │
//! │  └── Deserialization into request types                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules that need no collaborator (price, quantity, name)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: MenuService                                                  │
//! │  └── Rules that need stores (group exists, products exist, sums)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kitchenpos_core::money::Money;
//! use kitchenpos_core::validation::{validate_price, validate_quantity};
//!
//! assert_eq!(validate_price(Some(Money::new(16_000))).unwrap(), Money::new(16_000));
//! assert!(validate_price(None).is_err());
//! assert!(validate_quantity(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_MENU_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested price.
///
/// ## Rules
/// - Must be present
/// - Must be non-negative (zero is allowed)
pub fn validate_price(price: Option<Money>) -> ValidationResult<Money> {
    let price = price.ok_or_else(|| ValidationError::Required {
        field: "price".to_string(),
    })?;

    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Validates a menu line quantity.
///
/// Zero is allowed; a zero-quantity line contributes nothing to the total.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu name and returns it trimmed.
///
/// ## Rules
/// - Must be present and not blank
/// - At most [`MAX_MENU_NAME_LENGTH`] characters
///
/// Profanity is checked separately by the service.
pub fn validate_menu_name(name: Option<&str>) -> ValidationResult<&str> {
    let name = name.map(str::trim).unwrap_or_default();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_MENU_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_MENU_NAME_LENGTH,
        });
    }

    Ok(name)
}

// =============================================================================
// Unit Tests
// =============================================================================
