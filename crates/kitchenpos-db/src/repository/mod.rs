//! # Repository Module
//!
//! Database repository implementations for the menu core.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  MenuService (through store traits)                                    │
//! │       │                                                                 │
//! │       │  menus.find_by_id(id)                                           │
//! │       ▼                                                                 │
//! │  MenuRepository                                                        │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── save(&self, menu)      ← one transaction: menu row + line rows    │
//! │  └── list_all(&self)                                                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product lookup and upsert
//! - [`MenuGroupRepository`](menu_group::MenuGroupRepository) - Menu group lookup and upsert
//! - [`MenuRepository`](menu::MenuRepository) - Menu aggregate persistence

pub mod menu;
pub mod menu_group;
pub mod product;

use uuid::Uuid;

/// Generates a new entity id (UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
