//! # kitchenpos-core: Pure Menu Rules for KitchenPOS
//!
//! This crate holds the business rules of menu management as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KitchenPOS Menu Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Transport (HTTP handlers, out of scope)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kitchenpos-menu (MenuService)                   │   │
//! │  │    create, change_price, display, hide                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ kitchenpos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Menu    │  │   Money   │  │  totals   │  │   rules   │  │   │
//! │  │   │  Product  │  │           │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, MenuGroup, Menu, requests)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Line totals and the price ≤ total rule
//! - [`error`] - Domain error types and error kinds
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kitchenpos_core::money::Money;
//! use kitchenpos_core::pricing::{ensure_within_total, total_value};
//!
//! let total = total_value([(Money::new(15_000), 1), (Money::new(20_000), 1)]).unwrap();
//!
//! assert!(ensure_within_total(Money::new(35_000), total).is_ok());
//! assert!(ensure_within_total(Money::new(36_000), total).is_err());
//! ```

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use types::*;

/// Longest accepted menu name, in characters.
pub const MAX_MENU_NAME_LENGTH: usize = 255;
