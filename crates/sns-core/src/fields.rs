//! # Envelope Field Names: Single Source of Truth
//!
//! Every field name the pipeline looks at is defined here, together with the
//! table of alternate casings that some producers emit. The normalizer and
//! the structural validator both consult [`ALTERNATE_NAMES`]; neither keeps
//! its own list.
//!
//! ## Signed Field Order
//!
//! [`NOTIFICATION_SIGNABLE_FIELDS`] and [`SUBSCRIPTION_SIGNABLE_FIELDS`] are
//! ordered exactly as the producer concatenates them. Reordering either
//! array breaks every signature.

use crate::message::MessageType;

pub const MESSAGE: &str = "Message";
pub const MESSAGE_ID: &str = "MessageId";
pub const SUBJECT: &str = "Subject";
pub const SUBSCRIBE_URL: &str = "SubscribeURL";
pub const TIMESTAMP: &str = "Timestamp";
pub const TOKEN: &str = "Token";
pub const TOPIC_ARN: &str = "TopicArn";
pub const TYPE: &str = "Type";
pub const SIGNATURE: &str = "Signature";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNING_CERT_URL: &str = "SigningCertURL";
pub const UNSUBSCRIBE_URL: &str = "UnsubscribeURL";

/// A canonical field name and the alternate casing some producers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateName {
    pub canonical: &'static str,
    pub alternate: &'static str,
}

/// Canonical ↔ alternate casings. Lambda event records use the `...Url`
/// spelling for both URL fields.
pub const ALTERNATE_NAMES: &[AlternateName] = &[
    AlternateName {
        canonical: SIGNING_CERT_URL,
        alternate: "SigningCertUrl",
    },
    AlternateName {
        canonical: UNSUBSCRIBE_URL,
        alternate: "UnsubscribeUrl",
    },
];

/// Fields every message must carry, regardless of type.
pub const REQUIRED_FIELDS: [&str; 8] = [
    MESSAGE,
    MESSAGE_ID,
    TIMESTAMP,
    TOPIC_ARN,
    TYPE,
    SIGNATURE,
    SIGNING_CERT_URL,
    SIGNATURE_VERSION,
];

/// Additional fields required on `SubscriptionConfirmation` and
/// `UnsubscribeConfirmation` messages.
pub const SUBSCRIPTION_CONTROL_FIELDS: [&str; 2] = [SUBSCRIBE_URL, TOKEN];

/// Signed fields of an ordinary notification, in signing order.
pub const NOTIFICATION_SIGNABLE_FIELDS: [&str; 7] = [
    MESSAGE,
    MESSAGE_ID,
    SUBJECT,
    SUBSCRIBE_URL,
    TIMESTAMP,
    TOPIC_ARN,
    TYPE,
];

/// Signed fields of a subscription-control message, in signing order.
pub const SUBSCRIPTION_SIGNABLE_FIELDS: [&str; 8] = [
    MESSAGE,
    MESSAGE_ID,
    SUBJECT,
    SUBSCRIBE_URL,
    TIMESTAMP,
    TOKEN,
    TOPIC_ARN,
    TYPE,
];

/// The alternate casing registered for `canonical`, if any.
pub fn alternate_for(canonical: &str) -> Option<&'static str> {
    ALTERNATE_NAMES
        .iter()
        .find(|entry| entry.canonical == canonical)
        .map(|entry| entry.alternate)
}

/// The ordered field list that participates in signing for `message_type`.
pub fn signable_fields(message_type: &MessageType) -> &'static [&'static str] {
    if message_type.is_subscription_control() {
        &SUBSCRIPTION_SIGNABLE_FIELDS
    } else {
        &NOTIFICATION_SIGNABLE_FIELDS
    }
}
