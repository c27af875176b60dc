//! # sns-core: Foundational Types for SNS Message Validation
//!
//! Defines the message envelope and the pure, synchronous stages of the
//! validation pipeline. Nothing in this crate performs I/O.
//!
//! ## Pipeline Stages Provided Here
//!
//! 1. **Normalization** ([`normalize`]): folds Lambda-style field casing
//!    (`SigningCertUrl`, `UnsubscribeUrl`) onto the canonical names and drops
//!    an explicitly-null `Subject`.
//! 2. **Structural validation** ([`structure`]): checks that every required
//!    field is present, plus `SubscribeURL`/`Token` for subscription-control
//!    messages.
//! 3. **Certificate host trust** ([`trust`]): accepts only `https` URLs
//!    ending in `.pem` on a host matching the trust pattern.
//!
//! Certificate retrieval lives in `sns-cert-client`, signature verification
//! in `sns-crypto`, and the orchestrating pipeline in `sns-validator`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sns-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod envelope;
pub mod error;
pub mod fields;
pub mod message;
pub mod normalize;
pub mod structure;
pub mod trust;

pub use envelope::Envelope;
pub use error::{EnvelopeError, TrustPolicyError, UnsupportedSignatureVersion, UntrustedCertificateUrl};
pub use message::{MessageType, SignatureVersion};
pub use normalize::normalize;
pub use structure::{has_required_fields, missing_fields};
pub use trust::{CertificateTrustPolicy, DEFAULT_HOST_PATTERN};
