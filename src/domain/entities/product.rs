//! Product entity, the primary record of the catalog.

use chrono::{DateTime, Utc};

/// A catalog product.
///
/// The id is assigned by the store on first save and immutable thereafter.
/// `price` is optional; no non-negativity constraint is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(
        id: i64,
        name: String,
        description: String,
        price: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
        }
    }
}

/// Input data for creating a product, and the full field set written by an
/// update (updates overwrite all three fields, no partial-patch semantics).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}
