//! Multi-predicate order filtering
//!
//! Every predicate of a [`FilterCriteria`] is optional and all set predicates
//! must hold (AND semantics). Date bounds are whole days in a time zone: the
//! lower bound starts at 00:00:00.000 and the upper bound ends at
//! 23:59:59.999, both inclusive.

use crate::core::error::{AdminError, ValidationError};
use crate::core::query::OrderListParams;
use crate::entities::order::Order;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while turning raw query values into criteria
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("'{value}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}

impl CriteriaError {
    /// Name of the offending query parameter
    pub fn field(&self) -> &'static str {
        match self {
            CriteriaError::InvalidDate { field, .. } => field,
        }
    }
}

impl From<CriteriaError> for AdminError {
    fn from(err: CriteriaError) -> Self {
        AdminError::Validation(ValidationError::InvalidQuery {
            parameter: err.field().to_string(),
            message: err.to_string(),
        })
    }
}

/// Optional predicates over orders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive exact match on the order status
    pub status: Option<String>,
    /// Case-insensitive substring of the customer name or email
    pub customer: Option<String>,
    /// First day included
    pub date_from: Option<NaiveDate>,
    /// Last day included
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// True when no predicate is set; such criteria keep every order
    pub fn is_empty(&self) -> bool {
        non_blank(self.status.as_deref()).is_none()
            && non_blank(self.customer.as_deref()).is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Build criteria from query parameters
    ///
    /// Blank strings are treated as unset.
    pub fn from_params(params: &OrderListParams) -> Result<Self, CriteriaError> {
        Ok(Self {
            status: non_blank(params.status.as_deref()).map(str::to_string),
            customer: non_blank(params.customer.as_deref()).map(str::to_string),
            date_from: parse_date("date_from", params.date_from.as_deref())?,
            date_to: parse_date("date_to", params.date_to.as_deref())?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, CriteriaError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CriteriaError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Criteria with needles lowercased and day bounds resolved to instants
struct CompiledCriteria {
    status: Option<String>,
    customer: Option<String>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl CompiledCriteria {
    fn compile<Tz: TimeZone>(criteria: &FilterCriteria, tz: &Tz) -> Self {
        Self {
            status: non_blank(criteria.status.as_deref()).map(str::to_lowercase),
            customer: non_blank(criteria.customer.as_deref()).map(str::to_lowercase),
            from: criteria.date_from.map(|d| start_of_day(tz, d)),
            to: criteria.date_to.map(|d| end_of_day(tz, d)),
        }
    }

    fn matches(&self, order: &Order) -> bool {
        if let Some(status) = &self.status {
            if order.status.to_lowercase() != *status {
                return false;
            }
        }

        if let Some(needle) = &self.customer {
            let in_name = order.customer_name.to_lowercase().contains(needle.as_str());
            let in_email = order.customer_email.to_lowercase().contains(needle.as_str());
            if !in_name && !in_email {
                return false;
            }
        }

        if self.from.is_some_and(|from| order.created_at < from) {
            return false;
        }

        if self.to.is_some_and(|to| order.created_at > to) {
            return false;
        }

        true
    }
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN), true)
}

fn end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let last = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time of day");
    resolve_local(tz, last, false)
}

/// Map a wall-clock time to an instant.
///
/// Ambiguous times (clocks going back) resolve to the widest bound; times
/// skipped by a clock change are moved one hour toward the inside of the day.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime, lower: bool) -> DateTime<Utc> {
    let local = tz.from_local_datetime(&naive);
    let picked = if lower { local.earliest() } else { local.latest() };
    if let Some(dt) = picked {
        return dt.with_timezone(&Utc);
    }

    let shifted = if lower {
        naive + TimeDelta::hours(1)
    } else {
        naive - TimeDelta::hours(1)
    };
    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Filter orders with day bounds taken in the server's local time zone.
///
/// Returns the matching orders in their original relative order. The input
/// is never modified.
pub fn apply_filters(orders: &[Order], criteria: &FilterCriteria) -> Vec<Order> {
    apply_filters_in(orders, criteria, &Local)
}

/// Filter orders with day bounds taken in the given time zone
pub fn apply_filters_in<Tz: TimeZone>(
    orders: &[Order],
    criteria: &FilterCriteria,
    tz: &Tz,
) -> Vec<Order> {
    if criteria.is_empty() {
        return orders.to_vec();
    }

    let compiled = CompiledCriteria::compile(criteria, tz);
    orders
        .iter()
        .filter(|order| compiled.matches(order))
        .cloned()
        .collect()
}
