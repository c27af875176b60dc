//! # Message Type and Signature Version
//!
//! `Type` decides which extra fields are mandatory and which field set is
//! signed. `SignatureVersion` selects the digest algorithm; it is a closed
//! set, so an unknown version is a permanent failure rather than a guess.

use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedSignatureVersion;

/// The `Type` discriminator of an SNS message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
    Notification,
    SubscriptionConfirmation,
    UnsubscribeConfirmation,
    /// Any other vendor-defined value, kept verbatim.
    Other(String),
}

impl MessageType {
    /// Whether this type carries `SubscribeURL` and `Token` and signs over
    /// the subscription field set.
    pub fn is_subscription_control(&self) -> bool {
        matches!(
            self,
            Self::SubscriptionConfirmation | Self::UnsubscribeConfirmation
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Notification => "Notification",
            Self::SubscriptionConfirmation => "SubscriptionConfirmation",
            Self::UnsubscribeConfirmation => "UnsubscribeConfirmation",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for MessageType {
    fn from(s: &str) -> Self {
        match s {
            "Notification" => Self::Notification,
            "SubscriptionConfirmation" => Self::SubscriptionConfirmation,
            "UnsubscribeConfirmation" => Self::UnsubscribeConfirmation,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported values of `SignatureVersion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureVersion {
    /// RSA PKCS#1 v1.5 over SHA1.
    V1,
    /// RSA PKCS#1 v1.5 over SHA256.
    V2,
}

impl SignatureVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
        }
    }
}

impl FromStr for SignatureVersion {
    type Err = UnsupportedSignatureVersion;

    /// Exact match only: `" 1"`, `"01"` and `"1.0"` are all unsupported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            other => Err(UnsupportedSignatureVersion(other.to_string())),
        }
    }
}

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_round_trips_known_values() {
        for name in [
            "Notification",
            "SubscriptionConfirmation",
            "UnsubscribeConfirmation",
        ] {
            assert_eq!(MessageType::from(name).as_str(), name);
        }
    }

    #[test]
    fn unknown_message_type_is_kept_verbatim() {
        let t = MessageType::from("notification");
        assert_eq!(t, MessageType::Other("notification".into()));
        assert!(!t.is_subscription_control());
    }

    #[test]
    fn subscription_control_types() {
        assert!(MessageType::SubscriptionConfirmation.is_subscription_control());
        assert!(MessageType::UnsubscribeConfirmation.is_subscription_control());
        assert!(!MessageType::Notification.is_subscription_control());
    }

    #[test]
    fn parse_supported_versions() {
        assert_eq!("1".parse::<SignatureVersion>(), Ok(SignatureVersion::V1));
        assert_eq!("2".parse::<SignatureVersion>(), Ok(SignatureVersion::V2));
    }

    #[test]
    fn unsupported_version_names_the_value() {
        let err = "3".parse::<SignatureVersion>().unwrap_err();
        assert_eq!(err.to_string(), "The signature version 3 is not supported.");

        let err = "1.0".parse::<SignatureVersion>().unwrap_err();
        assert_eq!(err.0, "1.0");
    }
}
