//! Argument validation against a tool's declared parameters

use crate::types::{ParamType, ToolDefinition};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Errors that can occur while checking call arguments
#[derive(Debug, Error, PartialEq)]
pub enum SchemaValidationError {
    #[error("arguments must be an object, got {0}")]
    ArgumentsNotObject(String),
    #[error("missing required field '{0}'")]
    MissingRequiredField(String),
    #[error("invalid type for '{field}': expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },
    #[error("field '{0}' must not be empty")]
    EmptyValue(String),
    #[error("field '{field}' value {value} is below the minimum of {minimum}")]
    BelowMinimum { field: String, value: i64, minimum: i64 },
}

/// Check `arguments` against `definition` and return a normalized argument object.
///
/// Only declared parameters are carried over. Omitted optional parameters take their
/// declared default, integral floats become integers and a null value counts as omitted.
pub fn validate_arguments(
    definition: &ToolDefinition,
    arguments: Option<&JsonValue>,
) -> Result<Map<String, JsonValue>, SchemaValidationError> {
    let empty = Map::new();
    let args = match arguments {
        None | Some(JsonValue::Null) => &empty,
        Some(JsonValue::Object(map)) => map,
        Some(other) => {
            return Err(SchemaValidationError::ArgumentsNotObject(json_type_name(other).into()))
        }
    };

    let mut normalized = Map::new();
    for spec in &definition.params {
        let value = match args.get(&spec.name) {
            None | Some(JsonValue::Null) => {
                if spec.required {
                    return Err(SchemaValidationError::MissingRequiredField(spec.name.clone()));
                }
                if let Some(default) = &spec.default {
                    normalized.insert(spec.name.clone(), default.clone());
                }
                continue;
            }
            Some(v) => v,
        };

        let checked = match spec.param_type {
            ParamType::String => {
                let s = value.as_str().ok_or_else(|| type_error(&spec.name, spec.param_type, value))?;
                if spec.required && s.trim().is_empty() {
                    return Err(SchemaValidationError::EmptyValue(spec.name.clone()));
                }
                JsonValue::String(s.to_string())
            }
            ParamType::Integer => {
                let n = integer_value(value).ok_or_else(|| type_error(&spec.name, spec.param_type, value))?;
                if let Some(minimum) = spec.minimum {
                    if n < minimum {
                        return Err(SchemaValidationError::BelowMinimum {
                            field: spec.name.clone(),
                            value: n,
                            minimum,
                        });
                    }
                }
                JsonValue::from(n)
            }
        };
        normalized.insert(spec.name.clone(), checked);
    }

    Ok(normalized)
}

/// Integer view of a JSON number; oversized values saturate since they get clamped later
fn integer_value(value: &JsonValue) -> Option<i64> {
    let number = match value {
        JsonValue::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        // `as` saturates at the i64 bounds
        Some(f as i64)
    } else {
        None
    }
}

fn type_error(field: &str, expected: ParamType, actual: &JsonValue) -> SchemaValidationError {
    SchemaValidationError::InvalidFieldType {
        field: field.to_string(),
        expected: expected.as_str().to_string(),
        actual: json_type_name(actual).to_string(),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "number",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
