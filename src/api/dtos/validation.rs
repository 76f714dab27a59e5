//! Field extraction shared by the location request types.
//!
//! Each helper turns a raw value into either its typed form or the
//! validator code describing why it was rejected. Codes map to messages in
//! `error::validation_mapping`.

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

pub const REQUIRED: &str = "required";
pub const STRING: &str = "string";
pub const NUMERIC: &str = "numeric";

/// Parses a decimal string, rejecting `NaN` and infinities.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn json_string(value: Option<&Value>) -> Result<String, &'static str> {
    match value {
        None | Some(Value::Null) => Err(REQUIRED),
        Some(Value::String(raw)) => non_blank(raw),
        Some(_) => Err(STRING),
    }
}

pub fn json_number(value: Option<&Value>) -> Result<f64, &'static str> {
    match value {
        None | Some(Value::Null) => Err(REQUIRED),
        Some(Value::String(raw)) => query_number(Some(raw.as_str())),
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|value| value.is_finite())
            .ok_or(NUMERIC),
        Some(_) => Err(NUMERIC),
    }
}

pub fn query_string(value: Option<&str>) -> Result<String, &'static str> {
    value.map_or(Err(REQUIRED), non_blank)
}

pub fn query_number(value: Option<&str>) -> Result<f64, &'static str> {
    match value.map(str::trim) {
        None | Some("") => Err(REQUIRED),
        Some(raw) => parse_numeric(raw).ok_or(NUMERIC),
    }
}

/// Records a rejected field under `field` and hands back accepted values.
pub fn collect<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    outcome: Result<T, &'static str>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(code) => {
            errors.add(field, ValidationError::new(code));
            None
        }
    }
}

fn non_blank(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(REQUIRED)
    } else {
        Ok(trimmed.to_string())
    }
}
