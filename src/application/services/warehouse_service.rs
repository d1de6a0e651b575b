//! Warehouse lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Warehouse;
use crate::domain::repositories::WarehouseRepository;
use crate::error::AppError;

/// Service for warehouse reads, used by the GraphQL field resolvers.
pub struct WarehouseService<W: WarehouseRepository> {
    repository: Arc<W>,
}

impl<W: WarehouseRepository> WarehouseService<W> {
    /// Creates a new warehouse service.
    pub fn new(repository: Arc<W>) -> Self {
        Self { repository }
    }

    /// Retrieves a warehouse by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no warehouse has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_warehouse(&self, id: i64) -> Result<Warehouse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Warehouse not found", json!({ "id": id })))
    }
}
