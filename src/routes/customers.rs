use axum::{
    Json, Router,
    extract::{Path, State},
};

use crate::{
    error::AppResult, models::Customer, services::customer_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_customers))
        .route("/{id}", axum::routing::get(get_customer))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "List customers", body = Vec<Customer>)
    ),
    tag = "customers"
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer_service::list_customers(&state).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Get customer", body = Customer),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::get_customer(&state, id).await?;
    Ok(Json(customer))
}
