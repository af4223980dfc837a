//! Axum extractor for validated payloads
//!
//! This module provides the `Validated<T>` extractor that validates and
//! filters request payloads before they reach handlers.

use super::config::EntityValidationConfig;
use crate::core::error::{AdminError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Operation a payload is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// Trait for records that declare validation rules
pub trait ValidatableEntity {
    /// Get the validation configuration for a specific operation
    fn validation_config(operation: Operation) -> EntityValidationConfig;
}

/// Axum extractor that validates and filters a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_category(
///     State(state): State<AdminState>,
///     Validated(payload, ..): Validated<Category>,
/// ) -> AdminResult<Json<Category>> {
///     // payload is already trimmed and validated
/// }
/// ```
pub struct Validated<T>(pub Value, pub std::marker::PhantomData<T>);

impl<T> Validated<T> {
    /// Create a new validated payload
    pub fn new(payload: Value) -> Self {
        Self(payload, std::marker::PhantomData)
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableEntity + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();

        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                return Err(AdminError::Validation(ValidationError::InvalidJson {
                    message: e.body_text(),
                })
                .into_response());
            }
        };

        let operation = match method.as_str() {
            "PUT" | "PATCH" => Operation::Update,
            _ => Operation::Create,
        };

        let config = T::validation_config(operation);

        match config.validate_and_filter(payload) {
            Ok(validated_payload) => Ok(Validated::new(validated_payload)),
            Err(errors) => {
                tracing::debug!(entity = %config.entity_type, ?errors, "payload rejected");
                Err(AdminError::Validation(ValidationError::FieldErrors(errors)).into_response())
            }
        }
    }
}
