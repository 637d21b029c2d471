//! # Domain Types
//!
//! Entities and request shapes of the menu core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   MenuGroup     │   │      Menu       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  name, price    │       │
//! │  │  price          │   └─────────────────┘   │  menu_group     │       │
//! │  └────────▲────────┘                         │  menu_products ─┼──┐    │
//! │           │          ┌─────────────────┐     │  displayed      │  │    │
//! │           └──────────│  MenuProduct    │◄────┴─────────────────┘  │    │
//! │                      │  product, qty   │◄─────────────────────────┘    │
//! │                      └─────────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Requests vs Entities
//! What the caller sent (`CreateMenuRequest`, `ChangeMenuPriceRequest`) is a
//! separate type from what is stored (`Menu`). Request fields the caller may
//! omit are `Option`s so a missing price is distinguishable from a zero one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product owned by the product store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4). Empty until the store assigns one.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates an unsaved product; the store assigns the id on save.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            id: String::new(),
            name: name.into(),
            price,
        }
    }

    /// Whether the store has assigned an id yet.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

// =============================================================================
// Menu Group
// =============================================================================

/// A named grouping every menu belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuGroup {
    pub id: String,
    pub name: String,
}

impl MenuGroup {
    /// Creates an unsaved menu group; the store assigns the id on save.
    pub fn new(name: impl Into<String>) -> Self {
        MenuGroup {
            id: String::new(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Menu Product
// =============================================================================

/// A line item inside a menu.
///
/// The product is a snapshot resolved from the product store when the menu
/// was validated or read. Price checks always re-read live prices; this
/// snapshot is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuProduct {
    pub product: Product,
    pub quantity: i64,
}

impl MenuProduct {
    pub fn new(product: Product, quantity: i64) -> Self {
        MenuProduct { product, quantity }
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The persisted menu aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Menu {
    /// Assigned on creation, immutable thereafter.
    pub id: String,
    pub name: String,
    pub price: Money,
    pub menu_group: MenuGroup,
    pub menu_products: Vec<MenuProduct>,
    pub displayed: bool,
}

impl Menu {
    /// Product ids of all lines, in line order.
    pub fn product_ids(&self) -> Vec<String> {
        self.menu_products
            .iter()
            .map(|line| line.product.id.clone())
            .collect()
    }

    /// Whether any line references the given product.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.menu_products
            .iter()
            .any(|line| line.product_id() == product_id)
    }

    /// Replaces line snapshots with freshly read products.
    ///
    /// Lines whose product is absent from `products` keep their old snapshot.
    pub fn refresh_products(&mut self, products: &[Product]) {
        for line in &mut self.menu_products {
            if let Some(fresh) = products.iter().find(|p| p.id == line.product.id) {
                line.product = fresh.clone();
            }
        }
    }
}

// =============================================================================
// Requests
// =============================================================================

/// One requested line: a product id and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuProductRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl MenuProductRequest {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        MenuProductRequest {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Payload for creating a menu.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateMenuRequest {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub menu_group_id: String,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
    /// Initial display state; hidden when omitted.
    #[serde(default)]
    pub displayed: Option<bool>,
}

/// Payload for changing a menu's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeMenuPriceRequest {
    pub price: Option<Money>,
}

impl ChangeMenuPriceRequest {
    pub fn new(price: Money) -> Self {
        ChangeMenuPriceRequest { price: Some(price) }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
