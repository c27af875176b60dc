//! Accepted input forms.

use serde_json::Value;
use sns_core::Envelope;

/// A message to validate: raw webhook body, parsed JSON, or an envelope the
/// caller already built.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationInput {
    /// JSON text, e.g. the raw HTTP request body.
    Text(String),
    /// Already-parsed JSON. The top level must be an object.
    Json(Value),
    Envelope(Envelope),
}

impl From<&str> for ValidationInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ValidationInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for ValidationInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Envelope> for ValidationInput {
    fn from(envelope: Envelope) -> Self {
        Self::Envelope(envelope)
    }
}
