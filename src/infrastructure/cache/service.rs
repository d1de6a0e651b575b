//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

use crate::domain::entities::Product;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching single-product lookups, keyed by product id.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures degrade to database lookups).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - Size-bound cache with TTL eviction
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(product))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are
    /// logged and treated as cache misses.
    async fn get_product(&self, id: i64) -> CacheResult<Option<Product>>;

    /// Stores a product in the cache under its id.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set_product(&self, product: &Product) -> CacheResult<()>;

    /// Removes the cached entry for a product id.
    ///
    /// Called after a successful update or delete so subsequent reads observe
    /// the latest stored state.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
