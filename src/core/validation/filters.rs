//! Reusable field filters
//!
//! These filters transform field values before validation

use anyhow::Result;
use serde_json::{Value, json};

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: convert string to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_lowercase()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: turn an empty string into null
///
/// Optional text fields submitted blank are stored as absent.
pub fn empty_as_null() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_str() {
        Some("") => Ok(Value::Null),
        _ => Ok(value),
    }
}

/// Filter: parse numeric strings coming from HTML forms
pub fn parse_number() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |field: &str, value: Value| {
        let Some(s) = value.as_str() else {
            return Ok(value);
        };
        let s = s.trim();
        if let Ok(int) = s.parse::<i64>() {
            return Ok(json!(int));
        }
        match s.parse::<f64>() {
            Ok(num) if num.is_finite() => Ok(json!(num)),
            _ => Err(anyhow::anyhow!("'{}' must be a number", field)),
        }
    }
}

/// Filter: round number to specified decimal places
pub fn round_decimals(
    decimals: u32,
) -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    move |_: &str, value: Value| {
        if value.is_i64() || value.is_u64() {
            return Ok(value);
        }
        if let Some(num) = value.as_f64() {
            let factor = 10_f64.powi(decimals as i32);
            let rounded = (num * factor).round() / factor;
            Ok(json!(rounded))
        } else {
            Ok(value)
        }
    }
}
