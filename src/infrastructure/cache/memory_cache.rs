//! In-process cache implementation backed by moka.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

use super::service::{CacheResult, CacheService};
use crate::domain::entities::Product;

/// Size-bound, TTL-evicting cache for product lookups.
///
/// Backed by a concurrent moka cache; safe under concurrent readers and
/// writers. Entries are evicted when the capacity bound is reached or when
/// their TTL expires.
pub struct MemoryCache {
    products: Cache<i64, Product>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_capacity` products, each living
    /// at most `ttl`.
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let products = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self {
            products,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Hit count since startup.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Miss count since startup.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.products.entry_count()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_product(&self, id: i64) -> CacheResult<Option<Product>> {
        match self.products.get(&id).await {
            Some(product) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("cache_hits_total").increment(1);
                debug!("Cache HIT: product {}", id);
                Ok(Some(product))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                metrics::counter!("cache_misses_total").increment(1);
                debug!("Cache MISS: product {}", id);
                Ok(None)
            }
        }
    }

    async fn set_product(&self, product: &Product) -> CacheResult<()> {
        self.products.insert(product.id, product.clone()).await;
        Ok(())
    }

    async fn invalidate(&self, id: i64) -> CacheResult<()> {
        self.products.invalidate(&id).await;
        metrics::counter!("cache_invalidations_total").increment(1);
        debug!("Cache INVALIDATE: product {}", id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: i64, name: &str) -> Product {
        Product::new(id, name.to_string(), "d".to_string(), Some(1.0), Utc::now())
    }

    #[tokio::test]
    async fn test_get_after_set() {
        let cache = MemoryCache::new(16, Duration::from_secs(60));
        cache.set_product(&product(1, "Widget")).await.unwrap();

        let cached = cache.get_product(1).await.unwrap();
        assert_eq!(cached.unwrap().name, "Widget");
        assert_eq!(cache.hits(), 1);
    }

    #[tokio::test]
    async fn test_miss_on_unknown_id() {
        let cache = MemoryCache::new(16, Duration::from_secs(60));
        assert!(cache.get_product(99).await.unwrap().is_none());
        assert_eq!(cache.misses(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache = MemoryCache::new(16, Duration::from_secs(60));
        cache.set_product(&product(1, "Widget")).await.unwrap();
        cache.invalidate(1).await.unwrap();

        assert!(cache.get_product(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = MemoryCache::new(16, Duration::from_secs(60));
        cache.set_product(&product(1, "Widget")).await.unwrap();
        cache.set_product(&product(1, "Gadget")).await.unwrap();

        let cached = cache.get_product(1).await.unwrap();
        assert_eq!(cached.unwrap().name, "Gadget");
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache = MemoryCache::new(16, Duration::from_millis(50));
        cache.set_product(&product(1, "Widget")).await.unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.get_product(1).await.unwrap().is_none());
    }
}
