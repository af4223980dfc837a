//! Query parameters and sort expressions

use serde::Deserialize;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Field and direction a store should order a listing by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Ascending order on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending order on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Render as a PostgREST `order` parameter value (`field.asc` / `field.desc`)
    pub fn to_postgrest(&self) -> String {
        match self.direction {
            SortDirection::Asc => format!("{}.asc", self.field),
            SortDirection::Desc => format!("{}.desc", self.field),
        }
    }
}

/// Query parameters accepted by the order listing
///
/// Blank values are treated as unset, so HTML forms can submit every field.
///
/// # Example
/// ```text
/// GET /orders?status=pending
/// GET /orders?customer=alice&date_from=2024-01-01&date_to=2024-01-31
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OrderListParams {
    /// Lifecycle label to match (case-insensitive)
    pub status: Option<String>,

    /// Substring matched against customer name or email
    pub customer: Option<String>,

    /// Inclusive lower bound, `YYYY-MM-DD`
    pub date_from: Option<String>,

    /// Inclusive upper bound, `YYYY-MM-DD`
    pub date_to: Option<String>,
}
