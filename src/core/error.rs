//! Typed error handling for the admin API
//!
//! Handlers return [`AdminError`] so that every failure maps to a precise
//! HTTP status and a machine-readable code instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`RecordError`]: Record lookups and uniqueness (CRUD)
//! - [`ValidationError`]: Input validation, detected before any store call
//! - [`IntegrityError`]: Referential integrity between collections
//! - [`StorageError`]: Record store failures (logged and surfaced, never retried)
//!
//! [`ConfigError`] is raised while loading configuration, before any request
//! is served, and travels through `anyhow` instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_admin::prelude::*;
//!
//! async fn get_category(store: &dyn RecordStore<Category>, id: &str) -> AdminResult<Category> {
//!     store
//!         .get(id)
//!         .await
//!         .map_err(|e| AdminError::storage(store.backend(), e))?
//!         .ok_or_else(|| RecordError::not_found("category", id).into())
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the admin API
#[derive(Debug)]
pub enum AdminError {
    /// Record-related errors (CRUD operations)
    Record(RecordError),

    /// Validation errors
    Validation(ValidationError),

    /// Referential integrity errors
    Integrity(IntegrityError),

    /// Record store errors
    Storage(StorageError),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Record(e) => write!(f, "{}", e),
            AdminError::Validation(e) => write!(f, "{}", e),
            AdminError::Integrity(e) => write!(f, "{}", e),
            AdminError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Record(e) => Some(e),
            AdminError::Validation(e) => Some(e),
            AdminError::Integrity(e) => Some(e),
            AdminError::Storage(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AdminError {
    /// Wrap a record store failure
    ///
    /// The backend message is kept for the server log only; see
    /// [`AdminError::to_response`].
    pub fn storage(backend: &str, err: anyhow::Error) -> Self {
        #[cfg(feature = "remote")]
        if let Some(e) = err.downcast_ref::<reqwest::Error>() {
            if e.is_connect() || e.is_timeout() {
                return AdminError::Storage(StorageError::Unavailable {
                    backend: backend.to_string(),
                });
            }
        }

        AdminError::Storage(StorageError::OperationFailed {
            backend: backend.to_string(),
            message: err.to_string(),
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Record(e) => e.status_code(),
            AdminError::Validation(e) => e.status_code(),
            AdminError::Integrity(e) => e.status_code(),
            AdminError::Storage(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Record(e) => e.error_code(),
            AdminError::Validation(e) => e.error_code(),
            AdminError::Integrity(e) => e.error_code(),
            AdminError::Storage(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    ///
    /// Storage failures get a fixed message so backend internals never reach
    /// the client.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            AdminError::Storage(e) => e.public_message().to_string(),
            other => other.to_string(),
        };
        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AdminError::Record(RecordError::NotFound { collection, id })
            | AdminError::Record(RecordError::AlreadyExists { collection, id }) => {
                Some(serde_json::json!({
                    "collection": collection,
                    "id": id
                }))
            }
            AdminError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            AdminError::Validation(ValidationError::FieldError { field, message }) => {
                Some(serde_json::json!({
                    "fields": [FieldValidationError {
                        field: field.clone(),
                        message: message.clone(),
                    }]
                }))
            }
            AdminError::Integrity(IntegrityError::StillReferenced {
                collection,
                id,
                dependents,
                count,
            }) => Some(serde_json::json!({
                "collection": collection,
                "id": id,
                "dependents": dependents,
                "count": count
            })),
            _ => None,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            // The only place a server error is logged
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug)]
pub enum RecordError {
    /// Record was not found
    NotFound { collection: String, id: String },

    /// Record already exists (conflict on id or slug)
    AlreadyExists { collection: String, id: String },
}

impl RecordError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        RecordError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn already_exists(collection: &str, id: &str) -> Self {
        RecordError::AlreadyExists {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecordError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { collection, id } => {
                write!(f, "{} with id '{}' not found", collection, id)
            }
            RecordError::AlreadyExists { collection, id } => {
                write!(f, "{} '{}' already exists", collection, id)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl From<RecordError> for AdminError {
    fn from(err: RecordError) -> Self {
        AdminError::Record(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON format
    InvalidJson { message: String },

    /// Invalid query parameter
    InvalidQuery { parameter: String, message: String },
}

/// A single field validation error, rendered next to the offending field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldError { .. } | ValidationError::FieldErrors(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ValidationError::InvalidJson { .. } | ValidationError::InvalidQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } | ValidationError::FieldErrors(_) => {
                "VALIDATION_ERROR"
            }
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidQuery { .. } => "INVALID_QUERY",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
            ValidationError::InvalidQuery { parameter, message } => {
                write!(f, "Invalid query parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AdminError {
    fn from(err: ValidationError) -> Self {
        AdminError::Validation(err)
    }
}

// =============================================================================
// Integrity Errors
// =============================================================================

/// Errors related to references between collections
#[derive(Debug)]
pub enum IntegrityError {
    /// A parent record still has dependents and cannot be deleted
    StillReferenced {
        collection: String,
        id: String,
        dependents: String,
        count: usize,
    },
}

impl IntegrityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntegrityError::StillReferenced { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            IntegrityError::StillReferenced { .. } => "STILL_REFERENCED",
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::StillReferenced {
                collection,
                dependents,
                count,
                ..
            } => write!(
                f,
                "Cannot delete this {}. It has {} {}(s) associated with it.",
                collection, count, dependents
            ),
        }
    }
}

impl std::error::Error for IntegrityError {}

impl From<IntegrityError> for AdminError {
    fn from(err: IntegrityError) -> Self {
        AdminError::Integrity(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to record store backends
#[derive(Debug)]
pub enum StorageError {
    /// A store operation failed
    OperationFailed { backend: String, message: String },

    /// Backend not reachable
    Unavailable { backend: String },
}

impl StorageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorageError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            StorageError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::OperationFailed { .. } => "STORAGE_ERROR",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
        }
    }

    /// Message shown to API clients
    pub fn public_message(&self) -> &'static str {
        match self {
            StorageError::OperationFailed { .. } => {
                "The record store could not complete the request"
            }
            StorageError::Unavailable { .. } => "The record store is unavailable",
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::OperationFailed { backend, message } => {
                write!(f, "{} store error: {}", backend, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Record store '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for AdminError {
    fn from(err: StorageError) -> Self {
        AdminError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for admin handlers
pub type AdminResult<T> = Result<T, AdminError>;

/// Converts record store results into [`AdminResult`]s tagged with the backend
pub trait StorageContext<T> {
    fn storage_err(self, backend: &str) -> AdminResult<T>;
}

impl<T> StorageContext<T> for anyhow::Result<T> {
    fn storage_err(self, backend: &str) -> AdminResult<T> {
        self.map_err(|e| AdminError::storage(backend, e))
    }
}
