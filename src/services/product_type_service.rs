use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{
        product_types::{Column as TypeCol, Entity as ProductTypes},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{ProductRef, ProductTypeDetail, ProductTypeSummary},
    state::AppState,
};

pub async fn list_types(state: &AppState) -> AppResult<Vec<ProductTypeSummary>> {
    let types = ProductTypes::find()
        .order_by_asc(TypeCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|t| ProductTypeSummary {
            id: t.id,
            name: t.name,
        })
        .collect();

    Ok(types)
}

pub async fn get_type(state: &AppState, id: i32) -> AppResult<ProductTypeDetail> {
    let product_type = ProductTypes::find_by_id(id).one(&state.orm).await?;
    let product_type = match product_type {
        Some(t) => t,
        None => {
            tracing::warn!(type_id = id, "product type not found");
            return Err(AppError::NotFound);
        }
    };

    let products = Products::find()
        .filter(ProdCol::TypeId.eq(id))
        .order_by_asc(ProdCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|p| ProductRef {
            id: p.id,
            name: p.name,
        })
        .collect();

    Ok(ProductTypeDetail {
        id: product_type.id,
        name: product_type.name,
        products,
    })
}
