//! Behaviour of the aggregation and filter engine through the public API

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use shop_admin::engine::{StockStatus, items_summary, order_status_class, summarize_orders};
use shop_admin::prelude::*;

fn order(id: &str, name: &str, email: &str, status: &str, ymd: (i32, u32, u32)) -> Order {
    Order {
        id: id.to_string(),
        order_number: format!("ORD-{}", id),
        customer_name: name.to_string(),
        customer_email: email.to_string(),
        total: 10.0,
        status: status.to_string(),
        created_at: Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0).unwrap(),
        items: vec![],
    }
}

fn sample_orders() -> Vec<Order> {
    vec![
        order("1", "Alice", "alice@example.com", "pending", (2024, 1, 5)),
        order("2", "Bob", "bob@example.com", "completed", (2024, 2, 10)),
        order("3", "Carol", "carol@shop.io", "Shipped", (2024, 2, 11)),
        order("4", "alice smith", "as@example.com", "PENDING", (2024, 3, 1)),
        order("5", "Dan", "dan@shop.io", "processing", (2024, 3, 2)),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn criteria_grid() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_status("pending"),
        FilterCriteria::new().with_status("shipped"),
        FilterCriteria::new().with_customer("ALICE"),
        FilterCriteria::new().with_customer("shop.io"),
        FilterCriteria::new().with_date_from(date(2024, 2, 10)),
        FilterCriteria::new().with_date_to(date(2024, 2, 10)),
        FilterCriteria::new()
            .with_date_from(date(2024, 2, 1))
            .with_date_to(date(2024, 2, 29))
            .with_customer("o"),
        FilterCriteria::new()
            .with_status("pending")
            .with_customer("smith")
            .with_date_from(date(2024, 1, 1)),
        FilterCriteria::new().with_status("nonexistent"),
    ]
}

fn satisfies(order: &Order, criteria: &FilterCriteria) -> bool {
    let status_ok = criteria
        .status
        .as_deref()
        .is_none_or(|s| order.status.eq_ignore_ascii_case(s));
    let customer_ok = criteria.customer.as_deref().is_none_or(|c| {
        let needle = c.to_lowercase();
        order.customer_name.to_lowercase().contains(&needle)
            || order.customer_email.to_lowercase().contains(&needle)
    });
    let day = order.created_at.date_naive();
    let from_ok = criteria.date_from.is_none_or(|from| day >= from);
    let to_ok = criteria.date_to.is_none_or(|to| day <= to);
    status_ok && customer_ok && from_ok && to_ok
}

#[test]
fn test_unset_criteria_returns_input_unchanged() {
    let orders = sample_orders();
    assert_eq!(apply_filters(&orders, &FilterCriteria::new()), orders);

    let blank = FilterCriteria::new().with_status("").with_customer("   ");
    assert_eq!(apply_filters(&orders, &blank), orders);
}

#[test]
fn test_filtered_results_are_a_matching_subsequence() {
    let orders = sample_orders();

    for criteria in criteria_grid() {
        let result = apply_filters_in(&orders, &criteria, &Utc);
        assert!(result.len() <= orders.len());

        for kept in &result {
            assert!(satisfies(kept, &criteria), "{:?} kept by {:?}", kept.id, criteria);
        }

        // Order preserved and nothing matching left out
        let expected: Vec<&Order> = orders.iter().filter(|o| satisfies(o, &criteria)).collect();
        let actual: Vec<&Order> = result.iter().collect();
        assert_eq!(actual, expected, "criteria {:?}", criteria);
    }
}

#[test]
fn test_status_scenario() {
    let orders = vec![
        order("a", "Alice", "alice@example.com", "pending", (2024, 1, 5)),
        order("b", "Bob", "bob@example.com", "completed", (2024, 2, 10)),
    ];

    let result = apply_filters(&orders, &FilterCriteria::new().with_status("pending"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].customer_name, "Alice");
}

#[test]
fn test_date_bounds_in_a_shifted_zone() {
    // 23:30 UTC on Jan 5 is already Jan 6 at UTC+2
    let mut late = order("1", "Alice", "a@x.com", "pending", (2024, 1, 5));
    late.created_at = Utc.with_ymd_and_hms(2024, 1, 5, 23, 30, 0).unwrap();
    let orders = vec![late];

    let jan_6 = FilterCriteria::new()
        .with_date_from(date(2024, 1, 6))
        .with_date_to(date(2024, 1, 6));

    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(apply_filters_in(&orders, &jan_6, &plus_two).len(), 1);
    assert!(apply_filters_in(&orders, &jan_6, &Utc).is_empty());
}

fn category(id: &str) -> Category {
    let mut category = Category::new(format!("Category {}", id), None);
    category.id = id.to_string();
    category
}

fn product(category_id: &str) -> Product {
    Product::new("Item".to_string(), category_id.to_string(), 1.0, 1, None)
}

#[test]
fn test_dependent_count_scenario() {
    let categories = vec![category("c1")];
    let products = vec![product("c1"), product("c1"), product("c2")];

    let counts = compute_dependent_counts(&categories, &products, "category_id");
    assert_eq!(counts.len(), 1);
    assert_eq!(counts["c1"], 2);
    assert!(!counts.contains_key("c2"));
}

#[test]
fn test_dependent_counts_sum_to_dependents() {
    let categories: Vec<Category> = ["c1", "c2", "c3", "c4"].into_iter().map(category).collect();

    for n in 0..20 {
        let products: Vec<Product> = (0..n)
            .map(|i| product(&categories[(i * 7 + 3) % categories.len()].id))
            .collect();

        let counts = compute_dependent_counts(&categories, &products, "category_id");
        assert_eq!(counts.len(), categories.len());
        assert_eq!(counts.values().sum::<usize>(), products.len());
    }
}

#[test]
fn test_stock_classification_boundaries() {
    assert_eq!(
        classify_stock(0).as_pair(),
        ("Out of Stock", "status-out-of-stock")
    );
    assert_eq!(classify_stock(9).as_pair(), ("Low Stock", "status-low-stock"));
    assert_eq!(classify_stock(10).as_pair(), ("In Stock", "status-in-stock"));
    assert_eq!(classify_stock(1), StockStatus::LowStock);
    assert_eq!(classify_stock(u32::MAX), StockStatus::InStock);
}

#[test]
fn test_slug_examples_and_idempotence() {
    assert_eq!(derive_slug("Men's T-Shirts!! "), "men-s-t-shirts");

    let inputs = [
        "",
        "   ",
        "Home & Garden",
        "--already-a-slug--",
        "ÄÖÜ straße",
        "a__b..c",
        "MiXeD 123 Case",
        "🙂 emoji 🙂",
        "tab\tand\nnewline",
    ];
    for input in inputs {
        let once = derive_slug(input);
        assert_eq!(derive_slug(&once), once, "input {:?}", input);
        assert!(!once.starts_with('-') && !once.ends_with('-'));
        assert!(!once.contains("--"));
    }
}

#[test]
fn test_order_display_helpers() {
    assert_eq!(order_status_class("Completed"), "status-completed");
    assert_eq!(order_status_class("refunded"), "status-default");

    assert_eq!(items_summary(&[]), "N/A");
    let items = vec![LineItem::named("Mug"), LineItem::named("Shirt")];
    assert_eq!(items_summary(&items), "Mug, Shirt");

    let summary = summarize_orders(&sample_orders());
    assert_eq!(summary.total_orders, 5);
    assert_eq!(summary.total_revenue, 50.0);
}
