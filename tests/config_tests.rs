//! Integration tests for configuration and seed loading

use shop_admin::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config_file() {
    let file = yaml_file(
        r#"
server:
  host: 0.0.0.0
  port: 8081
  permissive_cors: false
log:
  filter: debug
dashboard:
  recent_orders: 5
store:
  backend: in_memory
"#,
    );

    let config = AdminConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.address(), "0.0.0.0:8081");
    assert!(!config.server.permissive_cors);
    assert_eq!(config.log.filter, "debug");
    assert_eq!(config.dashboard.recent_orders, 5);
    assert_eq!(config.store.backend, StoreBackend::InMemory);
}

#[test]
fn test_remote_config_with_credentials() {
    let config = AdminConfig::from_yaml_str(
        r#"
store:
  backend: remote
  url: https://project.example.co
  api_key: anon-key
"#,
    )
    .unwrap();

    assert_eq!(config.store.backend, StoreBackend::Remote);
    assert_eq!(config.store.url.as_deref(), Some("https://project.example.co"));
}

#[test]
fn test_unknown_backend_is_rejected() {
    assert!(AdminConfig::from_yaml_str("store:\n  backend: sqlite\n").is_err());
}

#[test]
fn test_malformed_file_reports_path() {
    let file = yaml_file("server: [unclosed");
    let path = file.path().to_str().unwrap().to_string();

    let err = AdminConfig::from_yaml_file(&path).unwrap_err();
    assert!(err.to_string().contains(&path));
}

#[tokio::test]
async fn test_seed_file_populates_in_memory_stores() {
    let seed = yaml_file(
        r#"
categories:
  - id: c1
    name: Shoes
    slug: shoes
    created_at: "2024-01-01T00:00:00Z"
    updated_at: "2024-01-01T00:00:00Z"
products:
  - id: p1
    title: Trail Runner
    slug: trail-runner
    category_id: c1
    price: 89.5
    stock_quantity: 4
    created_at: "2024-01-02T00:00:00Z"
    updated_at: "2024-01-02T00:00:00Z"
orders:
  - id: o1
    order_number: ORD-1001
    customer_name: Alice
    customer_email: alice@example.com
    total: 89.5
    status: pending
    created_at: "2024-01-03T09:30:00Z"
    items:
      - name: trail-runner
        title: Trail Runner
        quantity: 1
"#,
    );

    let mut config = AdminConfig::default();
    config.store.seed = Some(seed.path().to_str().unwrap().to_string());

    let state = AdminState::from_config(&config).unwrap();

    assert_eq!(state.categories.count_all().await.unwrap(), 1);
    assert_eq!(state.products.count("category_id", "c1").await.unwrap(), 1);

    let order = state.orders.get("o1").await.unwrap().unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].display_name(), Some("Trail Runner"));
}
