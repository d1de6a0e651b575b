//! Product retrieval and lifecycle service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service for product CRUD with a read-through cache on single lookups.
///
/// Cache discipline: `get_product` populates the per-id entry on a miss;
/// `update` and `delete` evict it after the write so subsequent reads
/// observe the latest stored state. Cache failures are fail-open and never
/// fail the request.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Retrieves a product by id, consulting the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        match self.cache.get_product(id).await {
            Ok(Some(product)) => return Ok(product),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for product {id}: {e}"),
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

        if let Err(e) = self.cache.set_product(&product).await {
            warn!("Cache write failed for product {id}: {e}");
        }

        Ok(product)
    }

    /// Creates a product from the request fields and returns the stored
    /// record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, request: NewProduct) -> Result<Product, AppError> {
        self.repository.create(request).await
    }

    /// Overwrites all mutable fields of an existing product.
    ///
    /// The existence check reads through the cache, mirroring the lookup
    /// path; the cache entry is evicted after the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, request: NewProduct) -> Result<Product, AppError> {
        self.get_product(id).await?;

        let updated = self
            .repository
            .update(id, request)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

        if let Err(e) = self.cache.invalidate(id).await {
            warn!("Cache invalidation failed for product {id}: {e}");
        }

        Ok(updated)
    }

    /// Hard-deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has the given id.
    /// Returns [`AppError::Internal`] on database errors (including the
    /// foreign-key rejection when inventory rows still reference the id).
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.get_product(id).await?;

        let deleted = self.repository.delete(id).await?;

        if let Err(e) = self.cache.invalidate(id).await {
            warn!("Cache invalidation failed for product {id}: {e}");
        }

        if !deleted {
            // Lost a race with a concurrent delete.
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        }

        Ok(())
    }
}
