//! Order HTTP handlers

use super::model::{LineItem, Order};
use crate::core::error::ValidationError;
use crate::core::validation::Validated;
use crate::core::{AdminResult, OrderBy, OrderListParams, StorageContext};
use crate::engine::{FilterCriteria, apply_filters, items_summary, order_status_class};
use crate::entities::support::{fetch_existing, optional_str, required_f64, required_str};
use crate::server::AdminState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use serde_json::{Value, json};

/// An order as rendered in listings, with its derived display fields
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub status_class: &'static str,
    pub items_summary: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            status_class: order_status_class(&order.status),
            items_summary: items_summary(&order.items),
            order,
        }
    }
}

pub async fn list_orders(
    State(state): State<AdminState>,
    Query(params): Query<OrderListParams>,
) -> AdminResult<Json<Value>> {
    let criteria = FilterCriteria::from_params(&params)?;

    let orders = state
        .orders
        .list(Some(&OrderBy::desc("created_at")))
        .await
        .storage_err(state.orders.backend())?;

    let views: Vec<OrderView> = apply_filters(&orders, &criteria)
        .into_iter()
        .map(OrderView::from)
        .collect();

    Ok(Json(json!({
        "orders": views,
        "count": views.len()
    })))
}

pub async fn get_order(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<Json<OrderView>> {
    let order = fetch_existing(state.orders.as_ref(), &id).await?;
    Ok(Json(order.into()))
}

pub async fn create_order(
    State(state): State<AdminState>,
    Validated(payload, ..): Validated<Order>,
) -> AdminResult<(StatusCode, Json<OrderView>)> {
    let items: Vec<LineItem> = match payload.get("items") {
        Some(items) if !items.is_null() => serde_json::from_value(items.clone())
            .map_err(|e| ValidationError::field("items", e.to_string()))?,
        _ => Vec::new(),
    };

    let mut order = Order::new(
        required_str(&payload, "order_number")?,
        required_str(&payload, "customer_name")?,
        required_str(&payload, "customer_email")?,
        required_f64(&payload, "total")?,
        items,
    );
    if let Some(status) = optional_str(&payload, "status") {
        order.status = status;
    }

    let order = state
        .orders
        .insert(order)
        .await
        .storage_err(state.orders.backend())?;

    tracing::info!(id = %order.id, number = %order.order_number, "order created");
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// Move an order to another lifecycle status
pub async fn update_order_status(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    Validated(payload, ..): Validated<Order>,
) -> AdminResult<Json<OrderView>> {
    let mut order = fetch_existing(state.orders.as_ref(), &id).await?;
    let status = required_str(&payload, "status")?;

    tracing::info!(id = %order.id, from = %order.status, to = %status, "order status changed");
    order.status = status;

    let order = state
        .orders
        .update(&id, order)
        .await
        .storage_err(state.orders.backend())?;

    Ok(Json(order.into()))
}

pub async fn delete_order(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> AdminResult<StatusCode> {
    fetch_existing(state.orders.as_ref(), &id).await?;

    state
        .orders
        .delete(&id)
        .await
        .storage_err(state.orders.backend())?;

    tracing::info!(id = %id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
