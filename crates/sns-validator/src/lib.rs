//! # sns-validator: SNS Message Validation
//!
//! Decides whether an inbound webhook payload was really published by SNS.
//! A [`Validator`] runs a strict linear pipeline and stops at the first
//! failure:
//!
//! 1. Parse JSON text into an [`Envelope`] (skipped for parsed input).
//! 2. Normalize alternate field casing and a null `Subject`.
//! 3. Check required fields are present.
//! 4. Check the certificate URL against the trust policy.
//! 5. Reject unsupported signature versions.
//! 6. Fetch the signing certificate (cached per store).
//! 7. Verify the signature over the canonical string.
//!
//! Only step 6 touches the network, and only after every local check has
//! passed.
//!
//! ## Crate Policy
//!
//! - Holds no global state. The certificate cache belongs to the
//!   [`CertificateStore`] a validator is built with.
//! - Errors map 1:1 from the stage that failed; nothing is retried.

pub mod config;
pub mod error;
pub mod input;
pub mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use error::ValidationError;
pub use input::ValidationInput;
pub use validator::Validator;

pub use sns_cert_client::{CertificateFetcher, CertificateStore, HttpCertificateFetcher};
pub use sns_core::{Envelope, DEFAULT_HOST_PATTERN};
pub use sns_crypto::TextEncoding;
