//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, service wiring, and Axum
//! server lifecycle.

use crate::application::services::{InventoryService, ProductService, WarehouseService};
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::persistence::{
    PgInventoryRepository, PgProductRepository, PgWarehouseRepository,
};
use crate::infrastructure::resilience::{CircuitBreaker, CircuitBreakerConfig};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Product cache (or NullCache when disabled)
/// - Circuit breaker policy
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!(
            "Cache enabled (capacity: {}, TTL: {}s)",
            config.cache_capacity,
            config.cache_ttl_seconds
        );
        Arc::new(MemoryCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        ))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let breaker = Arc::new(CircuitBreaker::new(CircuitBreakerConfig {
        failure_rate_threshold: config.breaker_failure_rate,
        open_duration: Duration::from_secs(config.breaker_open_secs),
        window_size: config.breaker_window_size,
        min_calls: config.breaker_min_calls,
    }));

    let pool = Arc::new(pool);
    let product_repository = Arc::new(PgProductRepository::new(pool.clone()));
    let warehouse_repository = Arc::new(PgWarehouseRepository::new(pool.clone()));
    let inventory_repository = Arc::new(PgInventoryRepository::new(pool.clone()));

    let product_service = Arc::new(ProductService::new(product_repository, cache.clone()));
    let inventory_service = Arc::new(InventoryService::new(inventory_repository));
    let warehouse_service = Arc::new(WarehouseService::new(warehouse_repository));

    let state = AppState::new(
        pool,
        product_service,
        inventory_service,
        warehouse_service,
        cache,
        breaker,
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
