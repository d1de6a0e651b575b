//! Warehouse entity.

use chrono::{DateTime, Utc};

/// A physical location that holds product stock.
///
/// Warehouses have no exposed lifecycle operations on the API surface;
/// they are referenced by [`crate::domain::entities::Inventory`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Warehouse {
    pub fn new(
        id: i64,
        name: String,
        location: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            location,
            created_at,
        }
    }
}

/// Input data for creating a warehouse.
#[derive(Debug, Clone)]
pub struct NewWarehouse {
    pub name: String,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_creation() {
        let warehouse = Warehouse::new(
            3,
            "North".to_string(),
            Some("Oslo".to_string()),
            Utc::now(),
        );
        assert_eq!(warehouse.id, 3);
        assert_eq!(warehouse.name, "North");
        assert_eq!(warehouse.location.as_deref(), Some("Oslo"));
    }
}
