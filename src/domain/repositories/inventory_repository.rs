//! Repository trait for inventory data access.

use crate::domain::entities::{Inventory, NewInventory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing inventory rows.
///
/// Besides plain CRUD, supports the derived lookup of all inventory rows
/// referencing a given product.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInventoryRepository`] - PostgreSQL implementation
///
/// # Examples
///
/// See integration tests: `tests/repository_inventory.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Persists a new inventory row and returns the stored form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including dangling
    /// product or warehouse references rejected by the store.
    async fn create(&self, new_inventory: NewInventory) -> Result<Inventory, AppError>;

    /// Finds an inventory row by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Inventory>, AppError>;

    /// Returns all inventory rows referencing the given product.
    ///
    /// The sequence is unordered and possibly empty; an unknown product id
    /// yields an empty sequence, not an error. Served by the index on
    /// `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<Inventory>, AppError>;

    /// Hard-deletes an inventory row.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` when the id did
    /// not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
