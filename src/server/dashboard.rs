//! Store overview: totals across collections and the latest orders

use super::AdminState;
use crate::core::{AdminResult, OrderBy, StorageContext};
use crate::engine::summarize_orders;
use crate::entities::order::OrderView;
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub total_products: usize,
    pub total_categories: usize,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_orders: Vec<OrderView>,
}

/// The three collections are read concurrently; revenue covers every order
pub async fn dashboard(State(state): State<AdminState>) -> AdminResult<Json<Dashboard>> {
    let newest_first = OrderBy::desc("created_at");
    let (orders, total_products, total_categories) = tokio::join!(
        state.orders.list(Some(&newest_first)),
        state.products.count_all(),
        state.categories.count_all(),
    );
    let orders = orders.storage_err(state.orders.backend())?;
    let total_products = total_products.storage_err(state.products.backend())?;
    let total_categories = total_categories.storage_err(state.categories.backend())?;

    let summary = summarize_orders(&orders);
    let recent_orders = orders
        .into_iter()
        .take(state.recent_orders)
        .map(OrderView::from)
        .collect();

    Ok(Json(Dashboard {
        stats: DashboardStats {
            total_orders: summary.total_orders,
            total_products,
            total_categories,
            total_revenue: summary.total_revenue,
        },
        recent_orders,
    }))
}
