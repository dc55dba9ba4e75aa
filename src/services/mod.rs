pub mod customer_service;
pub mod product_service;
pub mod product_type_service;
pub mod stats_service;
