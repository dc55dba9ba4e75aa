use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row shape of `GET /api/products`: the catalog listing with the
/// product-type name joined in.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct ProductSummary {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub stock: i32,
    pub type_name: String,
}

/// Row shape of `GET /api/products/top`.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TopProduct {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub stock: i32,
    pub sold: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct ProductDetail {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub stock: i32,
    pub cost: i64,
    pub selling_price: i64,
    pub type_id: i32,
    pub type_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductTypeSummary {
    pub id: i32,
    pub name: String,
}

/// id/name pair listed under a product type's detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductTypeDetail {
    pub id: i32,
    pub name: String,
    pub products: Vec<ProductRef>,
}

/// Revenue/cost/profit block, always zero.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsNumbers {
    pub revenue: i64,
    pub cost: i64,
    pub profit: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Stats {
    pub products: i64,
    pub customers: i64,
    pub orders: i64,
    pub numbers: StatsNumbers,
}
