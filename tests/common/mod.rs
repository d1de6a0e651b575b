#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use product_catalog::application::services::{InventoryService, ProductService, WarehouseService};
use product_catalog::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use product_catalog::infrastructure::persistence::{
    PgInventoryRepository, PgProductRepository, PgWarehouseRepository,
};
use product_catalog::infrastructure::resilience::{CircuitBreaker, CircuitBreakerConfig};
use product_catalog::state::AppState;

pub async fn create_test_product(
    pool: &PgPool,
    name: &str,
    description: &str,
    price: Option<f64>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_warehouse(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO warehouses (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_inventory(
    pool: &PgPool,
    product_id: i64,
    warehouse_id: i64,
    quantity: i32,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO inventories (product_id, warehouse_id, quantity) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(product_id)
    .bind(warehouse_id)
    .bind(quantity)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Builds an [`AppState`] over the given pool with caching disabled.
pub fn create_test_state(pool: PgPool) -> AppState {
    build_state(pool, Arc::new(NullCache))
}

/// Builds an [`AppState`] with a real in-memory cache, for tests that
/// exercise read-through and invalidation behavior end to end.
pub fn create_test_state_with_cache(pool: PgPool) -> AppState {
    build_state(
        pool,
        Arc::new(MemoryCache::new(64, Duration::from_secs(60))),
    )
}

fn build_state(pool: PgPool, cache: Arc<dyn CacheService>) -> AppState {
    let pool = Arc::new(pool);

    let product_repo = Arc::new(PgProductRepository::new(pool.clone()));
    let warehouse_repo = Arc::new(PgWarehouseRepository::new(pool.clone()));
    let inventory_repo = Arc::new(PgInventoryRepository::new(pool.clone()));

    let product_service = Arc::new(ProductService::new(product_repo, cache.clone()));
    let inventory_service = Arc::new(InventoryService::new(inventory_repo));
    let warehouse_service = Arc::new(WarehouseService::new(warehouse_repo));

    let breaker = Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default()));

    AppState::new(
        pool,
        product_service,
        inventory_service,
        warehouse_service,
        cache,
        breaker,
    )
}
