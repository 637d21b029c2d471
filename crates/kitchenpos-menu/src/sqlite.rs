//! # SQLite Stores
//!
//! Store trait implementations over the `kitchenpos-db` repositories.
//! `DbError` becomes `StoreError::Db`; nothing else is translated here.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::store::{MenuGroupStore, MenuStore, ProductStore};
use kitchenpos_core::{Menu, MenuGroup, Product};
use kitchenpos_db::{MenuGroupRepository, MenuRepository, ProductRepository};

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_all_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        Ok(self.get_by_ids(ids).await?)
    }

    async fn save(&self, product: Product) -> StoreResult<Product> {
        Ok(ProductRepository::save(self, &product).await?)
    }
}

#[async_trait]
impl MenuGroupStore for MenuGroupRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>> {
        Ok(self.get_by_id(id).await?)
    }
}

#[async_trait]
impl MenuStore for MenuRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Menu>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn save(&self, menu: Menu) -> StoreResult<Menu> {
        Ok(MenuRepository::save(self, &menu).await?)
    }

    async fn find_all(&self) -> StoreResult<Vec<Menu>> {
        Ok(self.list_all().await?)
    }
}
