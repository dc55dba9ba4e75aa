use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    entity::{
        product_types::Column as TypeCol,
        products::{self, Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Customer, ProductDetail, ProductSummary, TopProduct},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<ProductSummary>> {
    let items = Products::find()
        .select_only()
        .column(ProdCol::Id)
        .column(ProdCol::Sku)
        .column(ProdCol::Name)
        .column(ProdCol::Stock)
        .column_as(TypeCol::Name, "type_name")
        .join(JoinType::InnerJoin, products::Relation::ProductTypes.def())
        .order_by_asc(ProdCol::Id)
        .into_model::<ProductSummary>()
        .all(&state.orm)
        .await?;

    Ok(items)
}

/// Three best sellers by summed order-line amount. Products without any
/// order line stay eligible with sold = 0; ties resolve by id ascending.
pub async fn top_products(state: &AppState) -> AppResult<Vec<TopProduct>> {
    let items = sqlx::query_as::<_, TopProduct>(
        r#"
        SELECT p.id, p.sku, p.name, p.stock, COALESCE(SUM(ol.amount), 0) AS sold
        FROM products p
        LEFT JOIN order_lines ol ON ol.product_id = p.id
        GROUP BY p.id
        ORDER BY sold DESC, p.id ASC
        LIMIT 3
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(items)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ProductDetail> {
    let result = Products::find()
        .select_only()
        .column(ProdCol::Id)
        .column(ProdCol::Sku)
        .column(ProdCol::Name)
        .column(ProdCol::Description)
        .column(ProdCol::Stock)
        .column(ProdCol::Cost)
        .column(ProdCol::SellingPrice)
        .column(ProdCol::TypeId)
        .column_as(TypeCol::Name, "type_name")
        .join(JoinType::InnerJoin, products::Relation::ProductTypes.def())
        .filter(ProdCol::Id.eq(id))
        .into_model::<ProductDetail>()
        .one(&state.orm)
        .await?;

    match result {
        Some(p) => Ok(p),
        None => Err(AppError::NotFound),
    }
}

/// Customers with at least one order containing the product. A customer
/// who bought it in several orders still appears once.
pub async fn product_customers(state: &AppState, id: i32) -> AppResult<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(
        r#"
        SELECT DISTINCT c.id, c.full_name, c.company_name, c.email,
                        c.address, c.postal_code, c.city, c.country
        FROM customers c
        JOIN orders o ON o.customer_id = c.id
        JOIN order_lines ol ON ol.order_id = o.id
        WHERE ol.product_id = $1
        ORDER BY c.id
        "#,
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(customers)
}
