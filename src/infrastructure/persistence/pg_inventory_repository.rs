//! PostgreSQL implementation of the inventory repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Inventory, NewInventory};
use crate::domain::repositories::InventoryRepository;
use crate::error::AppError;

/// PostgreSQL repository for inventory rows.
///
/// The by-product lookup is served by the `idx_inventories_product_id`
/// index so it stays an indexed scan as inventory grows.
pub struct PgInventoryRepository {
    pool: Arc<PgPool>,
}

#[derive(FromRow)]
struct InventoryRow {
    id: i64,
    product_id: i64,
    warehouse_id: i64,
    quantity: i32,
}

impl From<InventoryRow> for Inventory {
    fn from(r: InventoryRow) -> Self {
        Inventory::new(r.id, r.product_id, r.warehouse_id, r.quantity)
    }
}

impl PgInventoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn create(&self, new_inventory: NewInventory) -> Result<Inventory, AppError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            INSERT INTO inventories (product_id, warehouse_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, warehouse_id, quantity
            "#,
        )
        .bind(new_inventory.product_id)
        .bind(new_inventory.warehouse_id)
        .bind(new_inventory.quantity)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Inventory>, AppError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT id, product_id, warehouse_id, quantity
            FROM inventories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<Inventory>, AppError> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT id, product_id, warehouse_id, quantity
            FROM inventories
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
