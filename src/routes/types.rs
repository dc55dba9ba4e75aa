use axum::{
    Json, Router,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::{ProductTypeDetail, ProductTypeSummary},
    services::product_type_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_types))
        .route("/{id}", axum::routing::get(get_type))
}

#[utoipa::path(
    get,
    path = "/api/types",
    responses(
        (status = 200, description = "List product types", body = Vec<ProductTypeSummary>)
    ),
    tag = "types"
)]
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<ProductTypeSummary>>> {
    let types = product_type_service::list_types(&state).await?;
    Ok(Json(types))
}

#[utoipa::path(
    get,
    path = "/api/types/{id}",
    params(
        ("id" = i32, Path, description = "Product type ID")
    ),
    responses(
        (status = 200, description = "Product type with its products", body = ProductTypeDetail),
        (status = 404, description = "Product type not found"),
    ),
    tag = "types"
)]
pub async fn get_type(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ProductTypeDetail>> {
    let detail = product_type_service::get_type(&state, id).await?;
    Ok(Json(detail))
}
