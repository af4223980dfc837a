//! Product record with validation and filtering rules

use crate::core::validation::{
    EntityValidationConfig, Operation, ValidatableEntity, filters, validators,
};
use crate::core::{FieldValue, Record};
use crate::engine::derive_slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable product, filed under one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category_id: String,
    pub price: f64,
    pub stock_quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product; the slug is derived from the title
    pub fn new(
        title: String,
        category_id: String,
        price: f64,
        stock_quantity: u32,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::core::new_record_id(),
            slug: derive_slug(&title),
            title,
            category_id,
            price,
            stock_quantity,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the title and re-derive the slug
    pub fn rename(&mut self, title: String) {
        self.slug = derive_slug(&title);
        self.title = title;
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Product {
    fn collection() -> &'static str {
        "products"
    }

    fn collection_singular() -> &'static str {
        "product"
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
            "title" => Some(FieldValue::from(self.title.as_str())),
            "slug" => Some(FieldValue::from(self.slug.as_str())),
            "category_id" => Some(FieldValue::from(self.category_id.as_str())),
            "price" => Some(FieldValue::Float(self.price)),
            "stock_quantity" => Some(FieldValue::Integer(i64::from(self.stock_quantity))),
            "description" => Some(FieldValue::from(self.description.as_deref())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl ValidatableEntity for Product {
    fn validation_config(operation: Operation) -> EntityValidationConfig {
        let config = EntityValidationConfig::new("product")
            .filter("title", filters::trim())
            .filter("category_id", filters::trim())
            .filter("description", filters::trim())
            .filter("description", filters::empty_as_null())
            .filter("price", filters::parse_number())
            .filter("price", filters::round_decimals(2))
            .filter("stock_quantity", filters::parse_number());

        let config = match operation {
            Operation::Create => config
                .validate("title", validators::required())
                .validate("category_id", validators::required())
                .validate("price", validators::required())
                .validate("stock_quantity", validators::required()),
            Operation::Update => config,
        };

        config
            .validate("title", validators::not_blank())
            .validate("title", validators::string_length(1, 200))
            .validate("category_id", validators::not_blank())
            .validate("price", validators::number())
            .validate("price", validators::positive())
            .validate("stock_quantity", validators::integer())
            .validate("stock_quantity", validators::non_negative())
            .validate("stock_quantity", validators::max_value(f64::from(u32::MAX)))
    }
}
