//! # kitchenpos-db: Database Layer for the Menu Core
//!
//! SQLite storage for products, menu groups and menus, using sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KitchenPOS Menu Data Flow                          │
//! │                                                                         │
//! │  MenuService (kitchenpos-menu, through store traits)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kitchenpos-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │◄───│ ProductRepository  │  │ (embedded) │  │   │
//! │  │   │  SqlitePool   │    │ MenuGroupRepository│  │ 001_init   │  │   │
//! │  │   │               │    │ MenuRepository     │  │            │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (kitchenpos.db)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kitchenpos_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("kitchenpos.db")).await?;
//! let menu = db.menus().get_by_id(&menu_id).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::menu::MenuRepository;
pub use repository::menu_group::MenuGroupRepository;
pub use repository::product::ProductRepository;
