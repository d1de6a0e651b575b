//! No-op cache implementation for testing or disabled caching.

use async_trait::async_trait;
use tracing::debug;

use super::service::{CacheResult, CacheService};
use crate::domain::entities::Product;

/// A cache implementation that does nothing.
///
/// All operations succeed immediately without storing or retrieving data.
///
/// # Use Cases
///
/// - Deployments where caching is explicitly disabled
/// - Testing scenarios where caching should be bypassed
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_product(&self, _id: i64) -> CacheResult<Option<Product>> {
        Ok(None)
    }

    async fn set_product(&self, _product: &Product) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
