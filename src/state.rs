use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{InventoryService, ProductService, WarehouseService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgInventoryRepository, PgProductRepository, PgWarehouseRepository,
};
use crate::infrastructure::resilience::CircuitBreaker;

/// Shared application state injected into all handlers.
///
/// The circuit breaker is a reusable policy: no call site wraps an
/// operation with it today, but it is configured and ready for any
/// outbound dependency that opts in.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub product_service: Arc<ProductService<PgProductRepository>>,
    pub inventory_service: Arc<InventoryService<PgInventoryRepository>>,
    pub warehouse_service: Arc<WarehouseService<PgWarehouseRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub breaker: Arc<CircuitBreaker>,
}

impl AppState {
    pub fn new(
        db: Arc<PgPool>,
        product_service: Arc<ProductService<PgProductRepository>>,
        inventory_service: Arc<InventoryService<PgInventoryRepository>>,
        warehouse_service: Arc<WarehouseService<PgWarehouseRepository>>,
        cache: Arc<dyn CacheService>,
        breaker: Arc<CircuitBreaker>,
    ) -> Self {
        Self {
            db,
            product_service,
            inventory_service,
            warehouse_service,
            cache,
            breaker,
        }
    }
}
