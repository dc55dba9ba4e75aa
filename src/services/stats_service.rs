use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    entity::{Customers, Orders, Products},
    error::AppResult,
    models::{Stats, StatsNumbers},
    state::AppState,
};

/// Table cardinalities for the dashboard; the revenue block is served
/// as zeros, not computed from order data.
pub async fn stats(state: &AppState) -> AppResult<Stats> {
    let products = Products::find().count(&state.orm).await? as i64;
    let customers = Customers::find().count(&state.orm).await? as i64;
    let orders = Orders::find().count(&state.orm).await? as i64;

    Ok(Stats {
        products,
        customers,
        orders,
        numbers: StatsNumbers {
            revenue: 0,
            cost: 0,
            profit: 0,
        },
    })
}
