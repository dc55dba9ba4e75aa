use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{
        Customer, ProductDetail, ProductRef, ProductSummary, ProductTypeDetail,
        ProductTypeSummary, Stats, StatsNumbers, TopProduct,
    },
    routes::{customers, health, products, stats, types},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::top_products,
        products::get_product,
        products::product_customers,
        types::list_types,
        types::get_type,
        customers::list_customers,
        customers::get_customer,
        stats::get_stats,
    ),
    components(
        schemas(
            ProductSummary,
            TopProduct,
            ProductDetail,
            ProductTypeSummary,
            ProductRef,
            ProductTypeDetail,
            Customer,
            Stats,
            StatsNumbers,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "products", description = "Product catalog endpoints"),
        (name = "types", description = "Product type endpoints"),
        (name = "customers", description = "Customer endpoints"),
        (name = "stats", description = "Dataset statistics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
