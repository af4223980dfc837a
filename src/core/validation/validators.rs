//! Reusable field validators
//!
//! Each validator receives the field name and its (already filtered) value
//! and returns a message suitable for display next to the field.

use crate::core::field::FieldFormat;
use serde_json::Value;

/// Validator: field is required (present and not null)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must contain something other than whitespace
///
/// Null passes through so that `optional not_blank` only checks provided values.
pub fn not_blank() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if s.trim().is_empty() => Err(format!("'{}' must not be blank", field)),
        _ => Ok(()),
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_f64() {
        Some(num) if num <= 0.0 => Err(format!("'{}' must be positive (value: {})", field, num)),
        _ => Ok(()),
    }
}

/// Validator: number must be zero or greater
pub fn non_negative() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_f64() {
        Some(num) if num < 0.0 => Err(format!(
            "'{}' must not be negative (value: {})",
            field, num
        )),
        _ => Ok(()),
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| match value.as_f64() {
        Some(num) if num > max => Err(format!(
            "'{}' must not exceed {} (value: {})",
            field, max, num
        )),
        _ => Ok(()),
    }
}

/// Validator: value must be a number without a fractional part
pub fn integer() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() || value.is_i64() || value.is_u64() {
            return Ok(());
        }
        match value.as_f64() {
            Some(num) if num.fract() == 0.0 => Ok(()),
            _ => Err(format!("'{}' must be a whole number", field)),
        }
    }
}

/// Validator: value must be a number
pub fn number() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() || value.is_number() {
            Ok(())
        } else {
            Err(format!("'{}' must be a number", field))
        }
    }
}

/// Validator: string length must be within range (in characters)
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len < min {
                Err(format!(
                    "'{}' must be at least {} characters (currently: {})",
                    field, min, len
                ))
            } else if len > max {
                Err(format!(
                    "'{}' must not exceed {} characters (currently: {})",
                    field, max, len
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !allowed.iter().any(|a| a == s) {
                Err(format!(
                    "'{}' must be one of: {} (current value: {})",
                    field,
                    allowed.join(", "),
                    s
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }
}

/// Validator: string must be an email address
pub fn email() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !FieldFormat::Email.validate(s) => {
            Err(format!("'{}' must be a valid email address", field))
        }
        _ => Ok(()),
    }
}
