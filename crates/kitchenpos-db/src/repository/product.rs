//! # Product Repository
//!
//! Database operations for products.
//!
//! The menu core only reads products: `get_by_id` and `get_by_ids` serve the
//! live-price checks. `save` exists for seeding and for the product side of
//! the system.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::DbResult;
use kitchenpos_core::{Money, Product};

/// Row shape of the `products` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: Money::new(row.price),
        }
    }
}

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM products WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Gets every product whose id is in `ids`.
    ///
    /// Results follow the order of `ids`; unknown ids are simply absent.
    /// A repeated id yields the product once per occurrence.
    pub async fn get_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(), "Loading products by id");

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT id, name, price FROM products WHERE id IN ({placeholders})");

        let mut query = sqlx::query_as::<_, ProductRow>(&sql);
        for id in ids {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await?;

        let by_id: HashMap<String, Product> = rows
            .into_iter()
            .map(|row| (row.id.clone(), Product::from(row)))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    /// Inserts or updates a product.
    ///
    /// A product without an id gets a fresh UUID v4.
    pub async fn save(&self, product: &Product) -> DbResult<Product> {
        let mut saved = product.clone();
        if !saved.is_persisted() {
            saved.id = generate_id();
        }

        debug!(id = %saved.id, price = %saved.price, "Saving product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price
            "#,
        )
        .bind(&saved.id)
        .bind(&saved.name)
        .bind(saved.price.amount())
        .execute(&self.pool)
        .await?;

        Ok(saved)
    }

    /// Counts stored products; the seed binary skips a populated database.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_reads_back() {
        let repo = repo().await;

        let saved = repo
            .save(&Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();

        assert!(saved.is_persisted());
        let loaded = repo.get_by_id(&saved.id).await.unwrap();
        assert_eq!(loaded, Some(saved));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_updates_price() {
        let repo = repo().await;
        let mut chicken = repo
            .save(&Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();

        chicken.price = Money::new(12_000);
        repo.save(&chicken).await.unwrap();

        let loaded = repo.get_by_id(&chicken.id).await.unwrap().unwrap();
        assert_eq!(loaded.price, Money::new(12_000));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_ids_keeps_request_order_and_skips_unknown() {
        let repo = repo().await;
        let chicken = repo
            .save(&Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();
        let pasta = repo
            .save(&Product::new("Cream pasta", Money::new(20_000)))
            .await
            .unwrap();

        let ids = vec![pasta.id.clone(), "missing".to_string(), chicken.id.clone()];
        let products = repo.get_by_ids(&ids).await.unwrap();

        assert_eq!(products, vec![pasta, chicken]);
        assert!(repo.get_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_rejected_by_schema() {
        let repo = repo().await;

        let err = repo
            .save(&Product::new("Broken", Money::new(-1)))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation { .. }));
    }
}
