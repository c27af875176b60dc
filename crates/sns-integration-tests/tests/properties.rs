//! # Pipeline Properties
//!
//! Randomized checks over freshly signed messages: anything signed with the
//! genuine key validates, and any change to a signed field is caught.

mod common;

use common::*;
use proptest::prelude::*;
use sns_core::{Envelope, SignatureVersion};
use sns_validator::ValidationError;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn message(body: &str, subject: Option<&str>, subscription: bool) -> Envelope {
    let mut env: Envelope = [
        ("MessageId", "0d4e2f3b-7a51-4c0e-9e58-2a7c9f1d6b11"),
        ("TopicArn", "arn:aws:sns:ap-southeast-2:123456789012:props"),
        ("Timestamp", "2024-06-01T12:00:00.000Z"),
        (
            "SigningCertURL",
            "https://sns.ap-southeast-2.amazonaws.com/SimpleNotificationService-props.pem",
        ),
        ("Message", body),
    ]
    .into_iter()
    .collect();
    if let Some(subject) = subject {
        env.insert("Subject", subject);
    }
    if subscription {
        env.insert("Type", "SubscriptionConfirmation");
        env.insert("Token", "2336412f37fb687f5d51e6e2425f004aed");
        env.insert(
            "SubscribeURL",
            "https://sns.ap-southeast-2.amazonaws.com/?Action=ConfirmSubscription",
        );
    } else {
        env.insert("Type", "Notification");
    }
    env
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn signed_messages_validate_and_tampering_is_caught(
        body in "\\PC{0,80}",
        subject in proptest::option::of("[ -~]{0,24}"),
        subscription in any::<bool>(),
        v2 in any::<bool>(),
    ) {
        let version = if v2 { SignatureVersion::V2 } else { SignatureVersion::V1 };
        let mut env = message(&body, subject.as_deref(), subscription);
        sign(&mut env, version);

        let rt = runtime();
        let v = validator();

        let validated = rt.block_on(v.validate(env.clone()));
        prop_assert!(validated.is_ok(), "{:?}", validated);

        let mut tampered = env.clone();
        tampered.insert("Message", format!("{body}."));
        let result = rt.block_on(v.validate(tampered));
        prop_assert!(matches!(result, Err(ValidationError::InvalidSignature)));

        // One fetch served both validations.
        prop_assert_eq!(fetch_calls(&v), 1);
    }

    /// Unsigned fields can be anything without affecting the outcome.
    #[test]
    fn unsigned_fields_do_not_matter(
        name in "X-[A-Za-z]{1,12}",
        value in "\\PC{0,40}",
    ) {
        let mut env = message("body", None, false);
        sign(&mut env, SignatureVersion::V1);
        env.insert(name, value);

        let result = runtime().block_on(validator().validate(env));
        prop_assert!(result.is_ok());
    }
}
