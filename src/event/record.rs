//! The log event payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::metadata::{merge_metadata, Metadata, METADATA_KEY};
use crate::event::validation::{validate, ValidationError};

/// A single log event: a message plus open structured data.
///
/// `data` may carry a reserved `metadata` object for tags and labels next to
/// any other fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct LogEvent {
    pub message: String,
    pub data: Map<String, Value>,
}

impl LogEvent {
    /// Create an event with empty data.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Map::new(),
        }
    }

    /// Replace the structured data.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Set one data field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// The event's own `data.metadata`, if present and an object.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.data.get(METADATA_KEY).and_then(Value::as_object)
    }

    /// Copy of this event with `bound` shallow-merged into `data.metadata`.
    ///
    /// Bound keys win on collision. A non-object `data.metadata` is treated
    /// as empty and replaced. Every other `data` field is carried over as is.
    pub fn merged_with(&self, bound: &Metadata) -> LogEvent {
        let empty = Metadata::new();
        let own = self.metadata().unwrap_or(&empty);
        let mut data = self.data.clone();
        data.insert(
            METADATA_KEY.to_string(),
            Value::Object(merge_metadata(own, bound)),
        );
        LogEvent {
            message: self.message.clone(),
            data,
        }
    }

    /// JSON object form: `{ "message": ..., "data": {...} }`.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::with_capacity(2);
        obj.insert("message".to_string(), Value::String(self.message.clone()));
        obj.insert("data".to_string(), Value::Object(self.data.clone()));
        Value::Object(obj)
    }
}

impl TryFrom<Value> for LogEvent {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<&str> for LogEvent {
    fn from(message: &str) -> Self {
        LogEvent::new(message)
    }
}

impl From<String> for LogEvent {
    fn from(message: String) -> Self {
        LogEvent::new(message)
    }
}
