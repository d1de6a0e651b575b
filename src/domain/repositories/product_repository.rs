//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns the stored form with its id populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Overwrites all mutable fields of an existing product.
    ///
    /// Returns the updated row, or `None` when no product has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, fields: NewProduct) -> Result<Option<Product>, AppError>;

    /// Hard-deletes a product.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` when the id did
    /// not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including the
    /// foreign-key rejection raised when inventory rows still reference the
    /// product.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
