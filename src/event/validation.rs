//! Event shape validation.
//!
//! # Responsibilities
//! - Check untyped input has a string `message` and an object `data`
//! - Leave `data` open: any extra fields are accepted
//!
//! # Design Decisions
//! - Pure function: `&Value → Result<LogEvent, ValidationError>`
//! - Runs before metadata merge and before any transport sees the event

use serde_json::Value;
use thiserror::Error;

use crate::event::record::LogEvent;

/// Why a candidate event was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("event must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("event is missing required field 'message'")]
    MissingMessage,

    #[error("field 'message' must be a string, got {0}")]
    MessageNotString(&'static str),

    #[error("event is missing required field 'data'")]
    MissingData,

    #[error("field 'data' must be an object, got {0}")]
    DataNotObject(&'static str),
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate a candidate event and convert it to a [`LogEvent`].
pub fn validate(candidate: &Value) -> Result<LogEvent, ValidationError> {
    let obj = candidate
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject(kind(candidate)))?;

    let message = match obj.get("message") {
        None => return Err(ValidationError::MissingMessage),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(ValidationError::MessageNotString(kind(other))),
    };

    let data = match obj.get("data") {
        None => return Err(ValidationError::MissingData),
        Some(Value::Object(map)) => map.clone(),
        Some(other) => return Err(ValidationError::DataNotObject(kind(other))),
    };

    Ok(LogEvent { message, data })
}
