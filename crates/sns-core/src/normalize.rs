//! # Envelope Normalization
//!
//! Absorbs producer inconsistencies before any check runs:
//!
//! - Alternate casings from [`fields::ALTERNATE_NAMES`] are copied onto the
//!   canonical name when only the alternate is present. An existing canonical
//!   value always wins.
//! - An explicitly-null `Subject` is removed. Producers that send
//!   `"Subject": null` did not sign a subject line, and leaving the key in
//!   place would make it look present.
//!
//! Normalization never fails and is idempotent.

use crate::envelope::Envelope;
use crate::fields;

/// Normalize `envelope` in place.
pub fn normalize(envelope: &mut Envelope) {
    for entry in fields::ALTERNATE_NAMES {
        if envelope.contains(entry.canonical) || !envelope.contains(entry.alternate) {
            continue;
        }
        match envelope.get(entry.alternate).map(str::to_owned) {
            Some(value) => envelope.insert(entry.canonical, value),
            None => envelope.insert_null(entry.canonical),
        };
        tracing::trace!(
            from = entry.alternate,
            to = entry.canonical,
            "normalized alternate field casing"
        );
    }

    if envelope.is_null(fields::SUBJECT) {
        envelope.remove(fields::SUBJECT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambda_casing_is_copied_to_canonical_names() {
        let mut env: Envelope = [
            ("SigningCertUrl", "https://sns.us-east-1.amazonaws.com/cert.pem"),
            ("UnsubscribeUrl", "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe"),
        ]
        .into_iter()
        .collect();

        normalize(&mut env);

        assert_eq!(
            env.get("SigningCertURL"),
            Some("https://sns.us-east-1.amazonaws.com/cert.pem")
        );
        assert_eq!(
            env.get("UnsubscribeURL"),
            Some("https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe")
        );
        // The alternate keys stay where they were.
        assert!(env.contains("SigningCertUrl"));
    }

    #[test]
    fn canonical_value_is_never_overwritten() {
        let mut env: Envelope = [
            ("SigningCertURL", "https://canonical/a.pem"),
            ("SigningCertUrl", "https://alternate/b.pem"),
        ]
        .into_iter()
        .collect();

        normalize(&mut env);

        assert_eq!(env.get("SigningCertURL"), Some("https://canonical/a.pem"));
    }

    #[test]
    fn null_subject_is_removed() {
        let mut env: Envelope = [("Type", "Notification")].into_iter().collect();
        env.insert_null("Subject");

        normalize(&mut env);

        assert!(!env.contains("Subject"));
    }

    #[test]
    fn non_null_subject_is_kept() {
        let mut env: Envelope = [("Subject", "hello")].into_iter().collect();
        normalize(&mut env);
        assert_eq!(env.get("Subject"), Some("hello"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut env: Envelope = [("SigningCertUrl", "https://x/y.pem"), ("Type", "Notification")]
            .into_iter()
            .collect();
        env.insert_null("Subject");

        normalize(&mut env);
        let once = env.clone();
        normalize(&mut env);

        assert_eq!(env, once);
    }
}
