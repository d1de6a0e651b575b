//! REST API route configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, update_product_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Product CRUD routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /products/{id}` - Fetch a product
/// - `POST   /products`      - Create a product
/// - `PUT    /products/{id}` - Fully update a product
/// - `DELETE /products/{id}` - Delete a product
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product_handler))
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
