//! Reusable field validators
//!
//! The required-field check follows truthiness rules: a field counts as
//! missing when it is absent, `null`, `false`, `0` or `""`. A zero price or
//! quantity is therefore reported as missing, not as out of range.

use crate::core::error::ValidationError;
use serde_json::{Map, Value};

/// Whether a JSON value counts as "present" for required-field checks
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check that every listed field is present and truthy
///
/// All failing fields are collected so the log line names each of them.
pub fn require_truthy(payload: &Map<String, Value>, fields: &[&str]) -> Result<(), ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !payload.get(**field).is_some_and(is_truthy))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Read a field as a string
pub fn string_field(field: &str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(field, "must be a string"))
}

/// Read a field as a finite number
///
/// Numeric strings are accepted because HTML forms submit every input as
/// text.
pub fn number_field(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid(field, "must be a number"))
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, f64) -> Result<(), ValidationError> + Send + Sync + Clone {
    |field: &str, value: f64| {
        if value > 0.0 {
            Ok(())
        } else {
            Err(invalid(field, format!("must be positive (got {})", value)))
        }
    }
}

/// Validator: number must be a whole number no smaller than `min`
pub fn whole_at_least(
    min: u64,
) -> impl Fn(&str, f64) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: f64| {
        if value.fract() != 0.0 {
            Err(invalid(field, format!("must be a whole number (got {})", value)))
        } else if value < min as f64 {
            Err(invalid(field, format!("must be at least {} (got {})", min, value)))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not exceed `max`
pub fn at_most(max: f64) -> impl Fn(&str, f64) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: f64| {
        if value > max {
            Err(invalid(field, format!("must not exceed {} (got {})", max, value)))
        } else {
            Ok(())
        }
    }
}
