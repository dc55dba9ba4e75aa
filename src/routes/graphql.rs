use axum::{Json, extract::State};
use serde_json::Value;

use crate::{error::AppResult, graphql::GraphqlClient};

/// Product listing served from the remote graph-query backend. The
/// remote response's product array is passed through untouched.
pub async fn list_products(State(client): State<GraphqlClient>) -> AppResult<Json<Value>> {
    let products = client.all_products().await?;
    Ok(Json(products))
}
