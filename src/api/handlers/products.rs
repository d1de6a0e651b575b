//! Handlers for the product CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single product by id.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the id does not resolve.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(product.into()))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// { "name": "Pump", "description": "Water pump", "price": 49.5 }
/// ```
///
/// Returns 201 Created with the stored representation, including the
/// assigned id.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state.product_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Fully updates a product.
///
/// # Endpoint
///
/// `PUT /api/products/{id}`
///
/// All three fields are overwritten; there are no partial-patch semantics.
///
/// # Errors
///
/// Returns 404 Not Found when the id does not resolve.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.update(id, payload.into()).await?;
    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}`
///
/// Returns 204 No Content on success.
///
/// # Errors
///
/// Returns 404 Not Found when the id does not resolve.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
