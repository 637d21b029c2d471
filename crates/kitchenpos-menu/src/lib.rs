//! # kitchenpos-menu: Menu Service for KitchenPOS
//!
//! Enforces the menu rules of `kitchenpos-core` against live collaborator
//! data: products, menu groups, stored menus, and a profanity checker.
//!
//! ## Modules
//!
//! - [`service`] - `MenuService`: create, change_price, display, hide
//! - [`store`] - Collaborator traits
//! - [`memory`] - In-memory stores for tests and demos
//! - [`sqlite`] - Store impls over the `kitchenpos-db` repositories
//! - [`profanity`] - Purgomalum client and banned-word checker
//! - [`config`] - `MenuConfig` (TOML + environment)
//! - [`bootstrap`] - Wires a service from configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - `MenuError`, `StoreError`
//!
//! ## Example
//! ```rust,ignore
//! use kitchenpos_menu::{bootstrap, telemetry, MenuConfig};
//!
//! telemetry::init_tracing();
//! let runtime = bootstrap::connect(&MenuConfig::load(None)?).await?;
//! let menu = runtime.service.display(&menu_id).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod memory;
pub mod profanity;
pub mod service;
pub mod sqlite;
pub mod store;
pub mod telemetry;

pub use config::{ConfigError, MenuConfig, ProfanityBackend};
pub use error::{MenuError, MenuResult, StoreError, StoreResult};
pub use service::MenuService;
pub use store::{MenuGroupStore, MenuStore, ProductStore, ProfanityChecker};
