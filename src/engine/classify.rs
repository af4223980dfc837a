//! Derived status labels shown next to records

use crate::entities::order::LineItem;
use serde::Serialize;

/// Stock at or above this quantity counts as "in stock"
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Stock level of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Style class tag used by the front end
    pub fn class_tag(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "status-out-of-stock",
            StockStatus::LowStock => "status-low-stock",
            StockStatus::InStock => "status-in-stock",
        }
    }

    /// `(label, class_tag)` pair
    pub fn as_pair(self) -> (&'static str, &'static str) {
        (self.label(), self.class_tag())
    }
}

/// Serialized form of a status: `{"label": .., "class": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<StockStatus> for StatusBadge {
    fn from(status: StockStatus) -> Self {
        StatusBadge {
            label: status.label(),
            class: status.class_tag(),
        }
    }
}

/// Classify a stock quantity.
///
/// Quantities are unsigned; negative input is rejected when the payload is
/// validated, before a quantity can reach this function.
pub fn classify_stock(quantity: u32) -> StockStatus {
    match quantity {
        0 => StockStatus::OutOfStock,
        q if q < LOW_STOCK_THRESHOLD => StockStatus::LowStock,
        _ => StockStatus::InStock,
    }
}

/// Style class for an order status badge
pub fn order_status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" => "status-completed",
        "pending" => "status-pending",
        "shipped" => "status-shipped",
        "processing" => "status-processing",
        _ => "status-default",
    }
}

/// Comma-separated item names, or `"N/A"` when there is nothing to show
pub fn items_summary(items: &[LineItem]) -> String {
    let names: Vec<&str> = items.iter().filter_map(LineItem::display_name).collect();
    if names.is_empty() {
        "N/A".to_string()
    } else {
        names.join(", ")
    }
}
