//! PostgreSQL implementation of the warehouse repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewWarehouse, Warehouse};
use crate::domain::repositories::WarehouseRepository;
use crate::error::AppError;

/// PostgreSQL repository for warehouse storage and retrieval.
pub struct PgWarehouseRepository {
    pool: Arc<PgPool>,
}

#[derive(FromRow)]
struct WarehouseRow {
    id: i64,
    name: String,
    location: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<WarehouseRow> for Warehouse {
    fn from(r: WarehouseRow) -> Self {
        Warehouse::new(r.id, r.name, r.location, r.created_at)
    }
}

impl PgWarehouseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PgWarehouseRepository {
    async fn create(&self, new_warehouse: NewWarehouse) -> Result<Warehouse, AppError> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            r#"
            INSERT INTO warehouses (name, location)
            VALUES ($1, $2)
            RETURNING id, name, location, created_at
            "#,
        )
        .bind(new_warehouse.name)
        .bind(new_warehouse.location)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Warehouse>, AppError> {
        let row = sqlx::query_as::<_, WarehouseRow>(
            r#"
            SELECT id, name, location, created_at
            FROM warehouses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
