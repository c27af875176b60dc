//! # Structural Validation
//!
//! Checks key presence only. A field whose value is `null` or the empty
//! string is still present; whether its value is usable is decided later by
//! the stage that reads it.
//!
//! A required key is also satisfied by its alternate casing from
//! [`fields::ALTERNATE_NAMES`], so an envelope that skipped normalization is
//! judged the same way as one that went through it.

use crate::envelope::Envelope;
use crate::fields;
use crate::message::MessageType;

/// Whether `name`, or its registered alternate casing, is present.
pub fn has_field(envelope: &Envelope, name: &str) -> bool {
    envelope.contains(name)
        || fields::alternate_for(name).is_some_and(|alt| envelope.contains(alt))
}

/// The required fields for this envelope, in check order.
///
/// Subscription-control types add `SubscribeURL` and `Token` to the
/// baseline set.
pub fn required_fields(envelope: &Envelope) -> Vec<&'static str> {
    let mut required = fields::REQUIRED_FIELDS.to_vec();
    if envelope
        .message_type()
        .as_ref()
        .is_some_and(MessageType::is_subscription_control)
    {
        required.extend(fields::SUBSCRIPTION_CONTROL_FIELDS);
    }
    required
}

/// Required fields that are absent from `envelope`.
pub fn missing_fields(envelope: &Envelope) -> Vec<&'static str> {
    required_fields(envelope)
        .into_iter()
        .filter(|name| !has_field(envelope, name))
        .collect()
}

/// Whether every required field is present.
pub fn has_required_fields(envelope: &Envelope) -> bool {
    required_fields(envelope)
        .into_iter()
        .all(|name| has_field(envelope, name))
}
