//! # Canonical Signing String
//!
//! The producer signs a newline-delimited rendering of a fixed, ordered set
//! of fields. Which set depends on the message type:
//!
//! - notifications: `Message`, `MessageId`, `Subject`, `SubscribeURL`,
//!   `Timestamp`, `TopicArn`, `Type`
//! - subscription control: the same plus `Token` between `Timestamp` and
//!   `TopicArn`
//!
//! Each field that is present with a non-null value contributes
//! `<name>\n<value>\n`. Absent and null fields contribute nothing, so a
//! notification without a subject signs without a `Subject` line.
//!
//! ## Security Invariant
//!
//! [`CanonicalMessage`] can only be built from an [`Envelope`], so the
//! verifier cannot be handed arbitrary text to check a signature against.

use sns_core::fields;
use sns_core::{Envelope, MessageType};

use crate::encoding::TextEncoding;
use crate::error::CryptoError;

/// The canonical string an SNS signature covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Build the canonical string for `envelope`, choosing the field set
    /// from its `Type`. A missing `Type` selects the notification set.
    pub fn new(envelope: &Envelope) -> Self {
        let message_type = envelope.message_type().unwrap_or(MessageType::Notification);
        Self::from_fields(envelope, fields::signable_fields(&message_type))
    }

    fn from_fields(envelope: &Envelope, names: &[&str]) -> Self {
        let mut out = String::new();
        for name in names {
            if let Some(value) = envelope.get(name) {
                out.push_str(name);
                out.push('\n');
                out.push_str(value);
                out.push('\n');
            }
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bytes that were hashed by the producer.
    pub fn to_bytes(&self, encoding: TextEncoding) -> Result<Vec<u8>, CryptoError> {
        encoding.encode(&self.0)
    }
}
