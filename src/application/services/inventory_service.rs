//! Inventory lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Inventory;
use crate::domain::repositories::InventoryRepository;
use crate::error::AppError;

/// Service for inventory reads.
///
/// The inventory surface is read-only: rows are listed per product and
/// fetched by id for the GraphQL field resolvers.
pub struct InventoryService<I: InventoryRepository> {
    repository: Arc<I>,
}

impl<I: InventoryRepository> InventoryService<I> {
    /// Creates a new inventory service.
    pub fn new(repository: Arc<I>) -> Self {
        Self { repository }
    }

    /// Lists all inventory rows for a product.
    ///
    /// An unknown product id yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_product(&self, product_id: i64) -> Result<Vec<Inventory>, AppError> {
        self.repository.find_by_product_id(product_id).await
    }

    /// Retrieves an inventory row by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_inventory(&self, id: i64) -> Result<Inventory, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Inventory not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockInventoryRepository;

    #[tokio::test]
    async fn test_list_for_product_empty() {
        let mut mock_repo = MockInventoryRepository::new();
        mock_repo
            .expect_find_by_product_id()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = InventoryService::new(Arc::new(mock_repo));

        let rows = service.list_for_product(5).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_list_for_product_returns_rows() {
        let mut mock_repo = MockInventoryRepository::new();
        mock_repo
            .expect_find_by_product_id()
            .withf(|product_id| *product_id == 5)
            .times(1)
            .returning(|_| Ok(vec![Inventory::new(1, 5, 2, 10), Inventory::new(2, 5, 3, 0)]));

        let service = InventoryService::new(Arc::new(mock_repo));

        let rows = service.list_for_product(5).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.product_id == 5));
    }

    #[tokio::test]
    async fn test_get_inventory_not_found() {
        let mut mock_repo = MockInventoryRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = InventoryService::new(Arc::new(mock_repo));

        let result = service.get_inventory(9).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
