//! # Menu Repository
//!
//! Persistence for the menu aggregate.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  menus                         menu_products                            │
//! │  ─────                         ─────────────                            │
//! │  id ◄──────────────────────────menu_id                                  │
//! │  name, price, displayed        seq (line order)                         │
//! │  menu_group_id ──► menu_groups product_id ──► products                  │
//! │                                quantity                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Save Semantics
//! `save` upserts the menu row and replaces all of its line rows inside one
//! transaction. A reader never sees a menu with half of its lines.
//!
//! Reads join the current `products` rows, so line snapshots always carry
//! the product data as it is now.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kitchenpos_core::{Menu, MenuGroup, MenuProduct, Money, Product};

#[derive(Debug, sqlx::FromRow)]
struct MenuRow {
    id: String,
    name: String,
    price: i64,
    displayed: bool,
    menu_group_id: String,
    menu_group_name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct MenuProductRow {
    menu_id: String,
    quantity: i64,
    product_id: String,
    product_name: String,
    product_price: i64,
}

impl From<MenuProductRow> for MenuProduct {
    fn from(row: MenuProductRow) -> Self {
        MenuProduct {
            product: Product {
                id: row.product_id,
                name: row.product_name,
                price: Money::new(row.product_price),
            },
            quantity: row.quantity,
        }
    }
}

impl MenuRow {
    fn into_menu(self, menu_products: Vec<MenuProduct>) -> Menu {
        Menu {
            id: self.id,
            name: self.name,
            price: Money::new(self.price),
            menu_group: MenuGroup {
                id: self.menu_group_id,
                name: self.menu_group_name,
            },
            menu_products,
            displayed: self.displayed,
        }
    }
}

const SELECT_MENUS: &str = r#"
    SELECT
        m.id,
        m.name,
        m.price,
        m.displayed,
        g.id AS menu_group_id,
        g.name AS menu_group_name
    FROM menus m
    INNER JOIN menu_groups g ON g.id = m.menu_group_id
"#;

const SELECT_MENU_PRODUCTS: &str = r#"
    SELECT
        mp.menu_id,
        mp.quantity,
        p.id AS product_id,
        p.name AS product_name,
        p.price AS product_price
    FROM menu_products mp
    INNER JOIN products p ON p.id = mp.product_id
"#;

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Gets a menu with its group and line items.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Menu>> {
        let sql = format!("{SELECT_MENUS} WHERE m.id = ?1");
        let Some(row) = sqlx::query_as::<_, MenuRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let sql = format!("{SELECT_MENU_PRODUCTS} WHERE mp.menu_id = ?1 ORDER BY mp.seq");
        let lines = sqlx::query_as::<_, MenuProductRow>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(Some(row.into_menu(lines.into_iter().map(MenuProduct::from).collect())))
    }

    /// Lists every menu, ordered by name.
    pub async fn list_all(&self) -> DbResult<Vec<Menu>> {
        let sql = format!("{SELECT_MENUS} ORDER BY m.name, m.id");
        let rows = sqlx::query_as::<_, MenuRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        let sql = format!("{SELECT_MENU_PRODUCTS} ORDER BY mp.seq");
        let line_rows = sqlx::query_as::<_, MenuProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        let mut lines: HashMap<String, Vec<MenuProduct>> = HashMap::new();
        for line in line_rows {
            lines
                .entry(line.menu_id.clone())
                .or_default()
                .push(MenuProduct::from(line));
        }

        debug!(count = rows.len(), "Loaded menus");

        Ok(rows
            .into_iter()
            .map(|row| {
                let menu_products = lines.remove(&row.id).unwrap_or_default();
                row.into_menu(menu_products)
            })
            .collect())
    }

    /// Inserts or updates a menu and replaces its line items.
    pub async fn save(&self, menu: &Menu) -> DbResult<Menu> {
        debug!(
            id = %menu.id,
            price = %menu.price,
            displayed = menu.displayed,
            lines = menu.menu_products.len(),
            "Saving menu"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO menus (id, name, price, menu_group_id, displayed)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                menu_group_id = excluded.menu_group_id,
                displayed = excluded.displayed
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price.amount())
        .bind(&menu.menu_group.id)
        .bind(menu.displayed)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM menu_products WHERE menu_id = ?1")
            .bind(&menu.id)
            .execute(&mut *tx)
            .await?;

        for line in &menu.menu_products {
            sqlx::query(
                "INSERT INTO menu_products (menu_id, product_id, quantity) VALUES (?1, ?2, ?3)",
            )
            .bind(&menu.id)
            .bind(line.product_id())
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(menu.clone())
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus")
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

    struct Fixture {
        db: Database,
        group: MenuGroup,
        chicken: Product,
        pasta: Product,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let group = db
            .menu_groups()
            .save(&MenuGroup::new("Two-item set"))
            .await
            .unwrap();
        let chicken = db
            .products()
            .save(&Product::new("Fried chicken", Money::new(15_000)))
            .await
            .unwrap();
        let pasta = db
            .products()
            .save(&Product::new("Cream pasta", Money::new(20_000)))
            .await
            .unwrap();

        Fixture {
            db,
            group,
            chicken,
            pasta,
        }
    }

    fn menu(f: &Fixture, id: &str, name: &str) -> Menu {
        Menu {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::new(30_000),
            menu_group: f.group.clone(),
            menu_products: vec![
                MenuProduct::new(f.chicken.clone(), 1),
                MenuProduct::new(f.pasta.clone(), 1),
            ],
            displayed: false,
        }
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let f = fixture().await;
        let repo = f.db.menus();
        let menu = menu(&f, "menu-1", "Chicken and pasta");

        repo.save(&menu).await.unwrap();

        assert_eq!(repo.get_by_id("menu-1").await.unwrap(), Some(menu));
        assert_eq!(repo.get_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_existing_replaces_price_state_and_lines() {
        let f = fixture().await;
        let repo = f.db.menus();
        let mut menu = menu(&f, "menu-1", "Chicken and pasta");
        repo.save(&menu).await.unwrap();

        menu.price = Money::new(14_000);
        menu.displayed = true;
        menu.menu_products = vec![MenuProduct::new(f.chicken.clone(), 1)];
        repo.save(&menu).await.unwrap();

        let loaded = repo.get_by_id("menu-1").await.unwrap().unwrap();
        assert_eq!(loaded.price, Money::new(14_000));
        assert!(loaded.displayed);
        assert_eq!(loaded.menu_products.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reads_join_current_product_prices() {
        let f = fixture().await;
        let repo = f.db.menus();
        repo.save(&menu(&f, "menu-1", "Chicken and pasta")).await.unwrap();

        let mut chicken = f.chicken.clone();
        chicken.price = Money::new(5_000);
        f.db.products().save(&chicken).await.unwrap();

        let loaded = repo.get_by_id("menu-1").await.unwrap().unwrap();
        assert_eq!(loaded.menu_products[0].product.price, Money::new(5_000));
    }

    #[tokio::test]
    async fn test_list_all_attaches_lines_per_menu() {
        let f = fixture().await;
        let repo = f.db.menus();
        repo.save(&menu(&f, "menu-b", "B set")).await.unwrap();
        let mut single = menu(&f, "menu-a", "A set");
        single.menu_products.truncate(1);
        repo.save(&single).await.unwrap();

        let menus = repo.list_all().await.unwrap();

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].id, "menu-a");
        assert_eq!(menus[0].menu_products.len(), 1);
        assert_eq!(menus[1].menu_products.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_menu_group_is_rejected_without_partial_write() {
        let f = fixture().await;
        let repo = f.db.menus();
        let mut menu = menu(&f, "menu-1", "Orphan");
        menu.menu_group.id = "missing".to_string();

        let err = repo.save(&menu).await.unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
