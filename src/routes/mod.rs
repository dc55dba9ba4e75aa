use axum::Router;

use crate::{graphql::GraphqlClient, state::AppState};

pub mod customers;
pub mod doc;
pub mod graphql;
pub mod health;
pub mod products;
pub mod stats;
pub mod types;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/types", types::router())
        .nest("/customers", customers::router())
        .nest("/stats", stats::router())
}

// The remote-backend router only covers the product listing; the other
// read operations have no remote counterpart.
pub fn create_graphql_api_router() -> Router<GraphqlClient> {
    Router::new().route("/products", axum::routing::get(graphql::list_products))
}
