//! Repository trait for warehouse data access.

use crate::domain::entities::{NewWarehouse, Warehouse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing warehouses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgWarehouseRepository`] - PostgreSQL implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Persists a new warehouse and returns the stored form with its id populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_warehouse: NewWarehouse) -> Result<Warehouse, AppError>;

    /// Finds a warehouse by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Warehouse>, AppError>;

    /// Hard-deletes a warehouse.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` when the id did
    /// not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
