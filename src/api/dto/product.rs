//! DTOs for the product endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewProduct, Product};

/// Request body for creating or fully updating a product.
///
/// No field-level validation is applied: an empty name or a negative price
/// is accepted as-is.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

/// Flat product representation returned by every product endpoint.
///
/// Storage-internal fields (timestamps) are never exposed.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_response_hides_storage_fields() {
        let product = Product::new(
            1,
            "Widget".to_string(),
            "d".to_string(),
            Some(9.99),
            Utc::now(),
        );
        let response = ProductResponse::from(product);
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "description": "d",
                "price": 9.99
            })
        );
    }

    #[test]
    fn test_request_price_is_optional() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"name":"Widget","description":"d"}"#).unwrap();
        assert!(req.price.is_none());
    }
}
