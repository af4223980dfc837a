//! Order record with validation and filtering rules

use crate::core::validation::{
    EntityValidationConfig, Operation, ValidatableEntity, filters, validators,
};
use crate::core::{FieldValue, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle labels an order may carry
pub const ORDER_STATUSES: [&str; 4] = ["pending", "processing", "shipped", "completed"];

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LineItem {
    /// Display name of the purchased item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product title, preferred over `name` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl LineItem {
    /// Create a line item with just a display name
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// The label shown in listings: title, falling back to name
    pub fn display_name(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.name.as_deref())
    }
}

/// A customer order
///
/// Orders are immutable once placed, except for their status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    /// Create a new pending order stamped with the current time
    pub fn new(
        order_number: String,
        customer_name: String,
        customer_email: String,
        total: f64,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            id: crate::core::new_record_id(),
            order_number,
            customer_name,
            customer_email,
            total,
            status: "pending".to_string(),
            created_at: Utc::now(),
            items,
        }
    }
}

impl Record for Order {
    fn collection() -> &'static str {
        "orders"
    }

    fn collection_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "order_number" => Some(FieldValue::from(self.order_number.as_str())),
            "customer_name" => Some(FieldValue::from(self.customer_name.as_str())),
            "customer_email" => Some(FieldValue::from(self.customer_email.as_str())),
            "total" => Some(FieldValue::Float(self.total)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}

fn statuses() -> Vec<String> {
    ORDER_STATUSES.iter().map(|s| s.to_string()).collect()
}

impl ValidatableEntity for Order {
    fn validation_config(operation: Operation) -> EntityValidationConfig {
        let config = EntityValidationConfig::new("order")
            .filter("status", filters::trim())
            .filter("status", filters::lowercase());

        match operation {
            Operation::Create => config
                .filter("order_number", filters::trim())
                .filter("customer_name", filters::trim())
                .filter("customer_email", filters::trim())
                .filter("customer_email", filters::lowercase())
                .filter("total", filters::parse_number())
                .filter("total", filters::round_decimals(2))
                .validate("order_number", validators::required())
                .validate("order_number", validators::not_blank())
                .validate("order_number", validators::string_length(1, 32))
                .validate("customer_name", validators::required())
                .validate("customer_name", validators::not_blank())
                .validate("customer_email", validators::required())
                .validate("customer_email", validators::email())
                .validate("total", validators::required())
                .validate("total", validators::number())
                .validate("total", validators::non_negative())
                .validate("status", validators::in_list(statuses())),
            Operation::Update => config
                .validate("status", validators::required())
                .validate("status", validators::in_list(statuses())),
        }
    }
}
