//! # Message Envelope
//!
//! The notification payload under validation: a flat map of field name to
//! value, where a value is either a string or an explicit JSON `null`.
//!
//! ## Presence vs. Value
//!
//! Two questions are kept apart throughout the pipeline:
//!
//! - [`Envelope::contains`]: is the key there at all? (A `null` counts.)
//!   Structural validation asks this.
//! - [`Envelope::get`]: is there a usable string value? Canonical string
//!   construction asks this; `null` fields are skipped.
//!
//! ## JSON Mapping
//!
//! Strings are stored verbatim, `null` as an explicit null. Other JSON values
//! (numbers, booleans, objects such as Lambda's `MessageAttributes`) are
//! stored as their compact JSON text. They never take part in signing, so
//! the representation only has to be stable.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::EnvelopeError;
use crate::fields;
use crate::message::MessageType;

/// An SNS message envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Envelope {
    fields: BTreeMap<String, Option<String>>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON text into an envelope.
    ///
    /// Fails if the text is not JSON or its top level is not an object.
    pub fn from_json(text: &str) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Convert an already-parsed JSON value into an envelope.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Err(EnvelopeError::NotAnObject("null")),
            Value::Bool(_) => return Err(EnvelopeError::NotAnObject("a boolean")),
            Value::Number(_) => return Err(EnvelopeError::NotAnObject("a number")),
            Value::String(_) => return Err(EnvelopeError::NotAnObject("a string")),
            Value::Array(_) => return Err(EnvelopeError::NotAnObject("an array")),
        };

        let fields = object
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                };
                (name, value)
            })
            .collect();

        Ok(Self { fields })
    }

    /// The envelope as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| {
                    let value = value.clone().map(Value::String).unwrap_or(Value::Null);
                    (name.clone(), value)
                })
                .collect(),
        )
    }

    /// Whether the key is present, including with a `null` value.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The string value of a field, or `None` when absent or `null`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the key is present with an explicit `null` value.
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(None))
    }

    /// Set a field to a string value, returning the previous entry.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<Option<String>> {
        self.fields.insert(name.into(), Some(value.into()))
    }

    /// Set a field to an explicit `null`, returning the previous entry.
    pub fn insert_null(&mut self, name: impl Into<String>) -> Option<Option<String>> {
        self.fields.insert(name.into(), None)
    }

    /// Remove a field entirely, returning its entry.
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    // -----------------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------------

    /// The `Type` discriminator, if it carries a value.
    pub fn message_type(&self) -> Option<MessageType> {
        self.get(fields::TYPE).map(MessageType::from)
    }

    pub fn message(&self) -> Option<&str> {
        self.get(fields::MESSAGE)
    }

    pub fn message_id(&self) -> Option<&str> {
        self.get(fields::MESSAGE_ID)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get(fields::SUBJECT)
    }

    pub fn topic_arn(&self) -> Option<&str> {
        self.get(fields::TOPIC_ARN)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.get(fields::TIMESTAMP)
    }

    pub fn signature(&self) -> Option<&str> {
        self.get(fields::SIGNATURE)
    }

    pub fn signature_version(&self) -> Option<&str> {
        self.get(fields::SIGNATURE_VERSION)
    }

    pub fn subscribe_url(&self) -> Option<&str> {
        self.get(fields::SUBSCRIBE_URL)
    }

    pub fn token(&self) -> Option<&str> {
        self.get(fields::TOKEN)
    }

    /// `SigningCertURL`, falling back to its alternate casing.
    pub fn signing_cert_url(&self) -> Option<&str> {
        self.get_with_alternate(fields::SIGNING_CERT_URL)
    }

    /// `UnsubscribeURL`, falling back to its alternate casing.
    pub fn unsubscribe_url(&self) -> Option<&str> {
        self.get_with_alternate(fields::UNSUBSCRIBE_URL)
    }

    fn get_with_alternate(&self, canonical: &str) -> Option<&str> {
        self.get(canonical)
            .or_else(|| fields::alternate_for(canonical).and_then(|alt| self.get(alt)))
    }
}

impl<K, V> FromIterator<(K, V)> for Envelope
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

impl TryFrom<Value> for Envelope {
    type Error = EnvelopeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
