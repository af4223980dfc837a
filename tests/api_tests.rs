//! HTTP round-trips through the full admin router
//!
//! JSON → HTTP request → Validated extractor → handler → RecordStore →
//! engine → HTTP response → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use shop_admin::prelude::*;

fn server_with(seed: SeedData) -> TestServer {
    let app = ServerBuilder::new()
        .with_state(AdminState::seeded(seed))
        .register_resources()
        .unwrap()
        .build()
        .unwrap();
    TestServer::new(app)
}

fn empty_server() -> TestServer {
    server_with(SeedData::default())
}

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

fn order(id: &str, customer: &str, email: &str, status: &str, created_at: &str) -> Order {
    Order {
        id: id.to_string(),
        order_number: format!("ORD-{}", id),
        customer_name: customer.to_string(),
        customer_email: email.to_string(),
        total: 10.0,
        status: status.to_string(),
        created_at: at(created_at),
        items: vec![LineItem::named("Mug")],
    }
}

fn category(id: &str, name: &str) -> Category {
    let mut category = Category::new(name.to_string(), None);
    category.id = id.to_string();
    category
}

fn product(id: &str, title: &str, category_id: &str, stock: u32) -> Product {
    let mut product = Product::new(title.to_string(), category_id.to_string(), 9.99, stock, None);
    product.id = id.to_string();
    product
}

async fn create_category(server: &TestServer, name: &str) -> Value {
    let response = server
        .post("/categories")
        .json(&json!({"name": name, "description": ""}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = empty_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_create_category_derives_slug() {
    let server = empty_server();
    let body = create_category(&server, "  Home & Garden ").await;

    assert_eq!(body["name"], "Home & Garden");
    assert_eq!(body["slug"], "home-garden");
    assert_eq!(body["product_count"], 0);
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_create_category_blank_name_is_rejected() {
    let server = empty_server();
    let response = server.post("/categories").json(&json!({"name": "   "})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["fields"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_category_duplicate_slug_conflicts() {
    let server = empty_server();
    create_category(&server, "Shoes").await;

    let response = server.post("/categories").json(&json!({"name": "shoes!"})).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["code"], "RECORD_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_list_categories_with_product_counts() {
    let server = server_with(SeedData {
        categories: vec![category("c2", "Hats"), category("c1", "Shoes")],
        products: vec![
            product("p1", "Boot", "c1", 3),
            product("p2", "Sandal", "c1", 0),
            product("p3", "Orphan", "c9", 1),
        ],
        orders: vec![],
    });

    let response = server.get("/categories").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["count"], 2);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories[0]["name"], "Hats");
    assert_eq!(categories[0]["product_count"], 0);
    assert_eq!(categories[1]["name"], "Shoes");
    assert_eq!(categories[1]["product_count"], 2);
}

#[tokio::test]
async fn test_update_category_renames_and_reslugs() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        ..SeedData::default()
    });

    let response = server
        .put("/categories/c1")
        .json(&json!({"name": "Running Shoes", "description": "Fast"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["slug"], "running-shoes");
    assert_eq!(body["description"], "Fast");
}

#[tokio::test]
async fn test_delete_referenced_category_is_refused() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        products: vec![product("p1", "Boot", "c1", 3), product("p2", "Sandal", "c1", 5)],
        orders: vec![],
    });

    let response = server.delete("/categories/c1").await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "STILL_REFERENCED");
    assert_eq!(
        body["message"],
        "Cannot delete this category. It has 2 product(s) associated with it."
    );

    // The category is still there
    server.get("/categories/c1").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_unreferenced_category() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        ..SeedData::default()
    });

    server
        .delete("/categories/c1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get("/categories/c1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_create_product_with_stock_badge() {
    let server = empty_server();
    let category = create_category(&server, "Kitchen").await;

    let response = server
        .post("/products")
        .json(&json!({
            "title": "Blue Mug",
            "category_id": category["id"],
            "price": "12.499",
            "stock_quantity": 4
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["slug"], "blue-mug");
    assert_eq!(body["price"], 12.5);
    assert_eq!(body["category_name"], "Kitchen");
    assert_eq!(body["stock_status"]["label"], "Low Stock");
    assert_eq!(body["stock_status"]["class"], "status-low-stock");
}

#[tokio::test]
async fn test_create_product_unknown_category_is_rejected() {
    let server = empty_server();

    let response = server
        .post("/products")
        .json(&json!({
            "title": "Blue Mug",
            "category_id": "missing",
            "price": 5,
            "stock_quantity": 1
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["details"]["fields"][0]["field"], "category_id");
}

#[tokio::test]
async fn test_create_product_negative_stock_is_rejected() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        ..SeedData::default()
    });

    let response = server
        .post("/products")
        .json(&json!({
            "title": "Boot",
            "category_id": "c1",
            "price": 50,
            "stock_quantity": -1
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_products_marks_dangling_category_unknown() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        products: vec![product("p1", "Boot", "c1", 25), product("p2", "Ghost", "gone", 0)],
        orders: vec![],
    });

    let body: Value = server.get("/products").await.json();
    assert_eq!(body["count"], 2);

    let products = body["products"].as_array().unwrap();
    let boot = products.iter().find(|p| p["id"] == "p1").unwrap();
    let ghost = products.iter().find(|p| p["id"] == "p2").unwrap();

    assert_eq!(boot["category_name"], "Shoes");
    assert_eq!(boot["stock_status"]["label"], "In Stock");
    assert_eq!(ghost["category_name"], "Unknown");
    assert_eq!(ghost["stock_status"]["label"], "Out of Stock");
}

#[tokio::test]
async fn test_partial_product_update() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes"), category("c2", "Boots")],
        products: vec![product("p1", "Hiker", "c1", 25)],
        orders: vec![],
    });

    let response = server
        .put("/products/p1")
        .json(&json!({"stock_quantity": 0, "category_id": "c2"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["title"], "Hiker");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["category_id"], "c2");
    assert_eq!(body["category_name"], "Boots");
    assert_eq!(body["stock_status"]["label"], "Out of Stock");
}

#[tokio::test]
async fn test_delete_product_then_category() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        products: vec![product("p1", "Boot", "c1", 3)],
        orders: vec![],
    });

    server
        .delete("/products/p1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/categories/c1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

// =============================================================================
// Orders
// =============================================================================

fn order_seed() -> SeedData {
    SeedData {
        orders: vec![
            order("1", "Ann", "ann@x.com", "pending", "2024-01-05T10:00:00Z"),
            order("2", "Bob", "bob@x.com", "shipped", "2024-01-06T10:00:00Z"),
            order("3", "Joann Lee", "jl@y.com", "Pending", "2024-01-07T10:00:00Z"),
        ],
        ..SeedData::default()
    }
}

fn order_numbers(body: &Value) -> Vec<String> {
    body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["order_number"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_orders_newest_first_with_derived_fields() {
    let server = server_with(order_seed());

    let body: Value = server.get("/orders").await.json();
    assert_eq!(body["count"], 3);
    assert_eq!(order_numbers(&body), ["ORD-3", "ORD-2", "ORD-1"]);
    assert_eq!(body["orders"][1]["status_class"], "status-shipped");
    assert_eq!(body["orders"][1]["items_summary"], "Mug");
}

#[tokio::test]
async fn test_list_orders_filtered_by_status_and_customer() {
    let server = server_with(order_seed());

    let body: Value = server
        .get("/orders")
        .add_query_param("status", "pending")
        .add_query_param("customer", "ann")
        .await
        .json();

    assert_eq!(order_numbers(&body), ["ORD-3", "ORD-1"]);
}

#[tokio::test]
async fn test_list_orders_blank_filters_are_ignored() {
    let server = server_with(order_seed());

    let body: Value = server
        .get("/orders")
        .add_query_param("status", "")
        .add_query_param("customer", "  ")
        .await
        .json();

    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_list_orders_malformed_date_is_bad_request() {
    let server = empty_server();

    let response = server
        .get("/orders")
        .add_query_param("date_from", "05/01/2024")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_create_order_and_change_status() {
    let server = empty_server();

    let response = server
        .post("/orders")
        .json(&json!({
            "order_number": "ORD-42",
            "customer_name": "Cleo",
            "customer_email": "Cleo@Example.com",
            "total": 30.5,
            "items": [{"name": "sku-1", "title": "Red Shirt"}, {"name": "Mug"}]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["status"], "pending");
    assert_eq!(created["customer_email"], "cleo@example.com");
    assert_eq!(created["items_summary"], "Red Shirt, Mug");
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/orders/{}/status", id))
        .json(&json!({"status": "Shipped"}))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["status"], "shipped");
    assert_eq!(updated["status_class"], "status-shipped");
}

#[tokio::test]
async fn test_unknown_order_status_is_rejected() {
    let server = server_with(order_seed());

    server
        .patch("/orders/1/status")
        .json(&json!({"status": "lost"}))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let server = empty_server();

    let response = server.get("/orders/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["code"], "RECORD_NOT_FOUND");

    server
        .delete("/orders/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let server = empty_server();

    let response = server
        .post("/orders")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_JSON");
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_overview() {
    let server = server_with(SeedData {
        categories: vec![category("c1", "Shoes")],
        products: vec![product("p1", "Boot", "c1", 3), product("p2", "Sandal", "c1", 0)],
        ..order_seed()
    });

    let body: Value = server.get("/dashboard").await.json();

    assert_eq!(body["stats"]["total_orders"], 3);
    assert_eq!(body["stats"]["total_products"], 2);
    assert_eq!(body["stats"]["total_categories"], 1);
    assert_eq!(body["stats"]["total_revenue"], 30.0);
    assert_eq!(body["recent_orders"].as_array().unwrap().len(), 3);
    assert_eq!(body["recent_orders"][0]["order_number"], "ORD-3");
}

// =============================================================================
// Validated payloads
// =============================================================================

/// Handlers bind `Validated(payload, ..)`; the pattern must stay usable
/// from outside the extractor's module.
#[test]
fn test_validated_payload_destructures_in_handler_position() {
    let Validated(payload, ..) = Validated::<Category>::new(json!({"name": "Shoes"}));
    assert_eq!(payload["name"], "Shoes");
}

#[tokio::test]
async fn test_create_then_update_category_through_validated_payloads() {
    let server = empty_server();

    let created: Value = server
        .post("/categories")
        .json(&json!({"name": "  Home & Garden "}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/categories/{}", id))
        .json(&json!({"name": "Garden"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Garden");
    assert_eq!(body["slug"], "garden");
}
