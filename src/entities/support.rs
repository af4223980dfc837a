//! Helpers shared by the resource handlers
//!
//! Payloads reaching handlers have already passed through [`Validated`], so
//! the accessors below mostly re-read what the rules guaranteed. They still
//! return errors instead of panicking when a field is missing or mistyped.
//!
//! [`Validated`]: crate::core::validation::Validated

use crate::core::error::{RecordError, ValidationError};
use crate::core::{AdminResult, FieldFormat, Record, RecordStore, StorageContext};
use crate::engine::derive_slug;
use serde_json::Value;

/// Read a string field, treating `null` as absent
pub fn optional_str(payload: &Value, field: &str) -> Option<String> {
    payload.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Read a string field that must be present
pub fn required_str(payload: &Value, field: &str) -> AdminResult<String> {
    optional_str(payload, field)
        .ok_or_else(|| ValidationError::field(field, format!("'{}' is required", field)).into())
}

/// Read a numeric field, treating `null` as absent
pub fn optional_f64(payload: &Value, field: &str) -> Option<f64> {
    payload.get(field).and_then(Value::as_f64)
}

/// Read a numeric field that must be present
pub fn required_f64(payload: &Value, field: &str) -> AdminResult<f64> {
    optional_f64(payload, field)
        .ok_or_else(|| ValidationError::field(field, format!("'{}' must be a number", field)).into())
}

/// Read a whole, non-negative number that fits in a `u32`
pub fn optional_u32(payload: &Value, field: &str) -> AdminResult<Option<u32>> {
    let Some(value) = payload.get(field).filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    let whole = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0)
            .map(|n| n as u64)
    });

    whole
        .and_then(|n| u32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| {
            ValidationError::field(field, format!("'{}' must be a whole number >= 0", field))
                .into()
        })
}

/// Like [`optional_u32`], but the field must be present
pub fn required_u32(payload: &Value, field: &str) -> AdminResult<u32> {
    optional_u32(payload, field)?
        .ok_or_else(|| ValidationError::field(field, format!("'{}' is required", field)).into())
}

/// Derive a slug from a display name, rejecting names that produce none
///
/// `field` names the input the error is reported against.
pub fn slug_for(name: &str, field: &str) -> AdminResult<String> {
    let slug = derive_slug(name);
    if !FieldFormat::Slug.validate(&slug) {
        return Err(ValidationError::field(
            field,
            format!("'{}' must contain at least one letter or digit", field),
        )
        .into());
    }
    Ok(slug)
}

/// Reject a slug already used by another record of the same collection
pub async fn ensure_unique_slug<T: Record>(
    store: &dyn RecordStore<T>,
    slug: &str,
) -> AdminResult<()> {
    let taken = store.count("slug", slug).await.storage_err(store.backend())?;
    if taken > 0 {
        return Err(RecordError::already_exists(T::collection_singular(), slug).into());
    }
    Ok(())
}

/// Fetch a record or fail with a not-found error
pub async fn fetch_existing<T: Record>(store: &dyn RecordStore<T>, id: &str) -> AdminResult<T> {
    store
        .get(id)
        .await
        .storage_err(store.backend())?
        .ok_or_else(|| RecordError::not_found(T::collection_singular(), id).into())
}
