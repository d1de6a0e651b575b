//! GraphQL layer exposing the catalog over a single schema.
//!
//! A second transport over the same services as the REST API. The surface
//! is intentionally narrower than REST: queries for `product` and
//! `inventories`, and a `createProduct` mutation.

pub mod schema;

pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

/// Executes a GraphQL request against the catalog schema.
///
/// # Endpoint
///
/// `POST /graphql`
pub async fn graphql_handler(
    Extension(schema): Extension<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphiQL IDE.
///
/// # Endpoint
///
/// `GET /graphql`
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
