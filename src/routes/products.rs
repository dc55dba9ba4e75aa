use axum::{
    Json, Router,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::{Customer, ProductDetail, ProductSummary, TopProduct},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_products))
        .route("/top", axum::routing::get(top_products))
        .route("/{id}", axum::routing::get(get_product))
        .route("/{id}/customers", axum::routing::get(product_customers))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products with their type name", body = Vec<ProductSummary>)
    ),
    tag = "products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductSummary>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/top",
    responses(
        (status = 200, description = "Top 3 products by sold amount", body = Vec<TopProduct>)
    ),
    tag = "products"
)]
pub async fn top_products(State(state): State<AppState>) -> AppResult<Json<Vec<TopProduct>>> {
    let items = product_service::top_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ProductDetail),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<ProductDetail>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/customers",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Customers who bought the product", body = Vec<Customer>)
    ),
    tag = "products"
)]
pub async fn product_customers(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = product_service::product_customers(&state, id).await?;
    Ok(Json(customers))
}
