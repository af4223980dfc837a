//! Aggregation and filter engine
//!
//! Pure, synchronous transforms over record snapshots. Nothing in this module
//! performs I/O, holds state, or mutates its inputs: handlers fetch records
//! from a store, pass them in, and render what comes back.
//!
//! - [`compute_dependent_counts`]: per-parent dependent counts in one pass
//! - [`apply_filters`]: AND-combined order predicates, order preserving
//! - [`classify_stock`]: stock level badge from a quantity
//! - [`derive_slug`]: URL-safe identifier from a display name

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod slug;

pub use aggregate::{OrderSummary, compute_dependent_counts, summarize_orders};
pub use classify::{
    LOW_STOCK_THRESHOLD, StatusBadge, StockStatus, classify_stock, items_summary,
    order_status_class,
};
pub use filter::{CriteriaError, FilterCriteria, apply_filters, apply_filters_in};
pub use slug::derive_slug;
