//! # Collaborator Contracts
//!
//! The menu service owns no data. Everything it reads or writes goes
//! through these traits, so the same service runs over SQLite, over the
//! in-memory maps used in tests, or over anything else that keeps the
//! contract.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductStore       find_by_id(id)        -> Option<Product>           │
//! │                     find_all_by_ids(ids)  -> Vec<Product>               │
//! │                     save(product)         -> Product (id assigned)      │
//! │                                                                         │
//! │  MenuGroupStore     find_by_id(id)        -> Option<MenuGroup>         │
//! │                                                                         │
//! │  MenuStore          find_by_id(id)        -> Option<Menu>              │
//! │                     save(menu)            -> Menu                       │
//! │                     find_all()            -> Vec<Menu>                  │
//! │                                                                         │
//! │  ProfanityChecker   contains_profanity(t) -> bool                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence is `Ok(None)` (or a missing element), never an error. Deciding
//! whether absence means `NotFound` or `InvalidArgument` is the service's job.
//!
//! `find_all_by_ids` returns products in request order and leaves unknown
//! ids out. Callers compare against the ids they asked for.

use async_trait::async_trait;

use crate::error::StoreResult;
use kitchenpos_core::{Menu, MenuGroup, Product};

/// Canonical product records, read-only from the menu service's view.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>>;

    async fn find_all_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>>;

    /// Stores a product, assigning an id when it has none.
    async fn save(&self, product: Product) -> StoreResult<Product>;
}

/// Menu group lookup.
#[async_trait]
pub trait MenuGroupStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>>;
}

/// Persisted menu aggregates.
///
/// `save` must be atomic for a single menu: the row and all of its line
/// items are written together or not at all.
#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Menu>>;

    async fn save(&self, menu: Menu) -> StoreResult<Menu>;

    async fn find_all(&self) -> StoreResult<Vec<Menu>>;
}

/// Text classifier for banned language.
#[async_trait]
pub trait ProfanityChecker: Send + Sync {
    async fn contains_profanity(&self, text: &str) -> StoreResult<bool>;
}
