//! # In-Memory Stores
//!
//! `RwLock`-guarded maps implementing the store traits. Used by tests and
//! by demos that should not touch a database file.
//!
//! Each call takes the lock once, so every individual save or lookup is
//! atomic. Nothing is held across calls.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::{MenuGroupStore, MenuStore, ProductStore};
use kitchenpos_core::{Menu, MenuGroup, Product};

fn assign_id(id: &mut String) {
    if id.is_empty() {
        *id = Uuid::new_v4().to_string();
    }
}

// =============================================================================
// Products
// =============================================================================

/// Product store backed by a map keyed on product id.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    async fn save(&self, mut product: Product) -> StoreResult<Product> {
        assign_id(&mut product.id);
        debug!(id = %product.id, price = %product.price, "Storing product in memory");
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }
}

// =============================================================================
// Menu Groups
// =============================================================================

/// Menu group store backed by a map keyed on group id.
#[derive(Debug, Default)]
pub struct InMemoryMenuGroupStore {
    groups: RwLock<BTreeMap<String, MenuGroup>>,
}

impl InMemoryMenuGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a group, assigning an id when it has none.
    ///
    /// Not part of [`MenuGroupStore`]: the menu service never creates groups.
    pub async fn save(&self, mut group: MenuGroup) -> MenuGroup {
        assign_id(&mut group.id);
        self.groups
            .write()
            .await
            .insert(group.id.clone(), group.clone());
        group
    }
}

#[async_trait]
impl MenuGroupStore for InMemoryMenuGroupStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>> {
        Ok(self.groups.read().await.get(id).cloned())
    }
}

// =============================================================================
// Menus
// =============================================================================

/// Menu store backed by a map keyed on menu id.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    menus: RwLock<BTreeMap<String, Menu>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.menus.read().await.is_empty()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Menu>> {
        Ok(self.menus.read().await.get(id).cloned())
    }

    async fn save(&self, mut menu: Menu) -> StoreResult<Menu> {
        assign_id(&mut menu.id);
        debug!(id = %menu.id, displayed = menu.displayed, "Storing menu in memory");
        self.menus.write().await.insert(menu.id.clone(), menu.clone());
        Ok(menu)
    }

    async fn find_all(&self) -> StoreResult<Vec<Menu>> {
        Ok(self.menus.read().await.values().cloned().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kitchenpos_core::Money;

    #[tokio::test]
    async fn test_product_store_assigns_ids_and_keeps_request_order() {
        let store = InMemoryProductStore::new();
        let chicken = store
            .save(Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();
        let pasta = store
            .save(Product::new("Cream pasta", Money::new(20_000)))
            .await
            .unwrap();

        assert!(chicken.is_persisted());
        assert_ne!(chicken.id, pasta.id);

        let ids = vec![pasta.id.clone(), "missing".to_string(), chicken.id.clone()];
        let found = store.find_all_by_ids(&ids).await.unwrap();
        assert_eq!(found, vec![pasta, chicken.clone()]);

        assert_eq!(store.find_by_id(&chicken.id).await.unwrap(), Some(chicken));
        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_product_save_with_id_replaces() {
        let store = InMemoryProductStore::new();
        let mut chicken = store
            .save(Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();

        chicken.price = Money::new(9_000);
        store.save(chicken.clone()).await.unwrap();

        let loaded = store.find_by_id(&chicken.id).await.unwrap().unwrap();
        assert_eq!(loaded.price, Money::new(9_000));
    }

    #[tokio::test]
    async fn test_menu_group_lookup() {
        let store = InMemoryMenuGroupStore::new();
        let group = store.save(MenuGroup::new("Two-item set")).await;

        assert_eq!(store.find_by_id(&group.id).await.unwrap(), Some(group));
        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_menu_store_save_and_scan() {
        let store = InMemoryMenuStore::new();
        assert!(store.is_empty().await);

        let menu = Menu {
            id: "menu-1".to_string(),
            name: "Chicken set".to_string(),
            price: Money::new(15_000),
            menu_group: MenuGroup {
                id: "group-1".to_string(),
                name: "Single item".to_string(),
            },
            menu_products: Vec::new(),
            displayed: false,
        };
        store.save(menu.clone()).await.unwrap();

        assert!(!store.is_empty().await);
        assert_eq!(store.find_by_id("menu-1").await.unwrap(), Some(menu.clone()));
        assert_eq!(store.find_all().await.unwrap(), vec![menu]);
    }
}
