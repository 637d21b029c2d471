//! # Menu Group Repository
//!
//! Menu groups are looked up by the menu core, never created by it.

use sqlx::SqlitePool;
use tracing::debug;

use super::generate_id;
use crate::error::DbResult;
use kitchenpos_core::MenuGroup;

#[derive(Debug, sqlx::FromRow)]
struct MenuGroupRow {
    id: String,
    name: String,
}

impl From<MenuGroupRow> for MenuGroup {
    fn from(row: MenuGroupRow) -> Self {
        MenuGroup {
            id: row.id,
            name: row.name,
        }
    }
}

/// Repository for menu group database operations.
#[derive(Debug, Clone)]
pub struct MenuGroupRepository {
    pool: SqlitePool,
}

impl MenuGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        MenuGroupRepository { pool }
    }

    /// Gets a menu group by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuGroup>> {
        let row = sqlx::query_as::<_, MenuGroupRow>("SELECT id, name FROM menu_groups WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(MenuGroup::from))
    }

    /// Inserts or renames a menu group. A group without an id gets one.
    pub async fn save(&self, menu_group: &MenuGroup) -> DbResult<MenuGroup> {
        let mut saved = menu_group.clone();
        if saved.id.is_empty() {
            saved.id = generate_id();
        }

        debug!(id = %saved.id, name = %saved.name, "Saving menu group");

        sqlx::query(
            r#"
            INSERT INTO menu_groups (id, name)
            VALUES (?1, ?2)
            ON CONFLICT (id) DO UPDATE SET name = excluded.name
            "#,
        )
        .bind(&saved.id)
        .bind(&saved.name)
        .execute(&self.pool)
        .await?;

        Ok(saved)
    }
}
