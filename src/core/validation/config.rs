//! Per-entity validation configuration
//!
//! Collects the filters and validators declared for each field and applies
//! them to a JSON payload: filters first (in declaration order), then
//! validators. Only the first failing validator of a field is reported.

use crate::core::error::FieldValidationError;
use serde_json::Value;

type FieldValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type FieldFilter = Box<dyn Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync>;

/// Validation and filtering rules for one entity and one operation
pub struct EntityValidationConfig {
    /// Entity type the rules belong to (e.g., "category")
    pub entity_type: String,
    validators: Vec<(String, Vec<FieldValidator>)>,
    filters: Vec<(String, Vec<FieldFilter>)>,
}

impl EntityValidationConfig {
    /// Create an empty configuration
    pub fn new(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            validators: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a validator for a field
    pub fn validate<V>(mut self, field: &str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        match self.validators.iter_mut().find(|(f, _)| f == field) {
            Some((_, list)) => list.push(Box::new(validator)),
            None => self
                .validators
                .push((field.to_string(), vec![Box::new(validator)])),
        }
        self
    }

    /// Add a filter for a field
    pub fn filter<F>(mut self, field: &str, filter: F) -> Self
    where
        F: Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        match self.filters.iter_mut().find(|(f, _)| f == field) {
            Some((_, list)) => list.push(Box::new(filter)),
            None => self.filters.push((field.to_string(), vec![Box::new(filter)])),
        }
        self
    }

    /// Apply filters then validators to a payload
    ///
    /// Returns the filtered payload, or every field error found.
    pub fn validate_and_filter(
        &self,
        payload: Value,
    ) -> Result<Value, Vec<FieldValidationError>> {
        let Value::Object(mut obj) = payload else {
            return Err(vec![FieldValidationError {
                field: "_".to_string(),
                message: "expected a JSON object".to_string(),
            }]);
        };

        let mut errors = Vec::new();

        for (field, filters) in &self.filters {
            let Some(mut value) = obj.remove(field) else {
                continue;
            };
            let mut failed = false;
            for filter in filters {
                match filter(field, value.clone()) {
                    Ok(next) => value = next,
                    Err(e) => {
                        errors.push(FieldValidationError {
                            field: field.clone(),
                            message: e.to_string(),
                        });
                        failed = true;
                        break;
                    }
                }
            }
            if !failed {
                obj.insert(field.clone(), value);
            }
        }

        for (field, validators) in &self.validators {
            if errors.iter().any(|e| &e.field == field) {
                continue;
            }
            let value = obj.get(field).cloned().unwrap_or(Value::Null);
            if let Some(message) = validators.iter().find_map(|v| v(field, &value).err()) {
                errors.push(FieldValidationError {
                    field: field.clone(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(obj))
        } else {
            Err(errors)
        }
    }
}
