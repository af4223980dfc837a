//! Category record with validation and filtering rules

use crate::core::validation::{
    EntityValidationConfig, Operation, ValidatableEntity, filters, validators,
};
use crate::core::{FieldValue, Record};
use crate::engine::derive_slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product category
///
/// The number of products filed under a category is derived on every listing
/// and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category; the slug is derived from the name
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: crate::core::new_record_id(),
            slug: derive_slug(&name),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the name and re-derive the slug
    pub fn rename(&mut self, name: String) {
        self.slug = derive_slug(&name);
        self.name = name;
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Category {
    fn collection() -> &'static str {
        "categories"
    }

    fn collection_singular() -> &'static str {
        "category"
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
            "name" => Some(FieldValue::from(self.name.as_str())),
            "slug" => Some(FieldValue::from(self.slug.as_str())),
            "description" => Some(FieldValue::from(self.description.as_deref())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            _ => None,
        }
    }
}

impl ValidatableEntity for Category {
    fn validation_config(_operation: Operation) -> EntityValidationConfig {
        // The form always submits both fields, so create and update share rules
        EntityValidationConfig::new("category")
            .filter("name", filters::trim())
            .filter("description", filters::trim())
            .filter("description", filters::empty_as_null())
            .validate("name", validators::required())
            .validate("name", validators::not_blank())
            .validate("name", validators::string_length(1, 100))
    }
}
