pub mod customers;
pub mod order_lines;
pub mod orders;
pub mod product_types;
pub mod products;

pub use customers::Entity as Customers;
pub use order_lines::Entity as OrderLines;
pub use orders::Entity as Orders;
pub use product_types::Entity as ProductTypes;
pub use products::Entity as Products;
