use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::customers::{Column as CustCol, Entity as Customers, Model as CustomerModel},
    error::{AppError, AppResult},
    models::Customer,
    state::AppState,
};

pub async fn list_customers(state: &AppState) -> AppResult<Vec<Customer>> {
    let customers = Customers::find()
        .order_by_asc(CustCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();

    Ok(customers)
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<Customer> {
    let customer = Customers::find_by_id(id).one(&state.orm).await?;
    match customer {
        Some(c) => Ok(customer_from_entity(c)),
        None => {
            tracing::warn!(customer_id = id, "customer not found");
            Err(AppError::NotFound)
        }
    }
}

fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        full_name: model.full_name,
        company_name: model.company_name,
        email: model.email,
        address: model.address,
        postal_code: model.postal_code,
        city: model.city,
        country: model.country,
    }
}
