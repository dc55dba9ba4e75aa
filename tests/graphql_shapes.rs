use axum_storefront_api::graphql::{ALL_PRODUCTS_QUERY, extract_all_products};
use serde_json::json;

#[test]
fn query_selects_the_passthrough_fields() {
    assert!(ALL_PRODUCTS_QUERY.starts_with("query allProducts"));
    for field in ["id", "sku", "name", "stock"] {
        assert!(
            ALL_PRODUCTS_QUERY.contains(field),
            "query should select {field}"
        );
    }
}

#[test]
fn extracts_the_product_array_verbatim() {
    let products = json!([
        {"id": 1, "sku": "GRD-001", "name": "Conical Burr Grinder", "stock": 34},
        {"id": 2, "sku": "GRD-002", "name": "Ceramic Hand Mill", "stock": 120}
    ]);
    let body = json!({ "data": { "allProducts": products.clone() } });

    let extracted = extract_all_products(body).unwrap();
    assert_eq!(extracted, products);
}

#[test]
fn malformed_body_is_an_error() {
    assert!(extract_all_products(json!({})).is_err());
    assert!(extract_all_products(json!({ "data": {} })).is_err());
    assert!(extract_all_products(json!({ "errors": [{"message": "boom"}] })).is_err());
}
