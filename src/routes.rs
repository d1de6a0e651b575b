//! Top-level router configuration combining REST and GraphQL routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: DB, cache (public)
//! - `/api/*`            - REST product CRUD (rate limited)
//! - `POST /graphql`     - GraphQL execution endpoint
//! - `GET  /graphql`     - GraphiQL IDE
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::graphql::{build_schema, graphiql_handler, graphql_handler};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse
///   proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let schema = build_schema(state.clone());

    let api_router = api::routes::product_routes();
    let api_router = if behind_proxy {
        api_router.layer(rate_limit::proxy_layer())
    } else {
        api_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/graphql", post(graphql_handler).get(graphiql_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(Extension(schema))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
