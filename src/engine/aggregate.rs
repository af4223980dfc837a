//! Count aggregation across collections

use crate::core::{FieldValue, Record};
use crate::entities::order::Order;
use serde::Serialize;
use std::collections::HashMap;

/// Count the dependents referencing each parent.
///
/// Dependents are grouped in a single pass by the value of
/// `parent_key_field`, then every parent id is looked up in the groups. Every
/// parent appears in the result, with zero when nothing references it.
/// Dependents pointing at an id that is not among `parents` are ignored.
pub fn compute_dependent_counts<P, D>(
    parents: &[P],
    dependents: &[D],
    parent_key_field: &str,
) -> HashMap<String, usize>
where
    P: Record,
    D: Record,
{
    let mut groups: HashMap<String, usize> = HashMap::with_capacity(parents.len());
    for dependent in dependents {
        if let Some(FieldValue::String(key)) = dependent.field_value(parent_key_field) {
            *groups.entry(key).or_default() += 1;
        }
    }

    parents
        .iter()
        .map(|parent| {
            let count = groups.get(parent.id()).copied().unwrap_or(0);
            (parent.id().to_string(), count)
        })
        .collect()
}

/// Order totals shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
}

/// Sum order totals, rounded to cents
pub fn summarize_orders(orders: &[Order]) -> OrderSummary {
    let revenue: f64 = orders.iter().map(|o| o.total).sum();
    OrderSummary {
        total_orders: orders.len(),
        total_revenue: (revenue * 100.0).round() / 100.0,
    }
}
