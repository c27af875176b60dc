//! # Validation Errors
//!
//! One variant per pipeline stage. The first failing stage decides the
//! variant; messages are stable and safe to return to the caller.

use sns_cert_client::CertificateError;
use sns_core::{EnvelopeError, UnsupportedSignatureVersion, UntrustedCertificateUrl};
use sns_crypto::SignatureError;
use thiserror::Error;

/// Why a message was rejected.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The input text is not a JSON object.
    #[error(transparent)]
    MalformedInput(#[from] EnvelopeError),

    /// Required keys are absent, listed in check order.
    #[error("Message missing required keys: {}", .missing.join(", "))]
    MissingRequiredFields { missing: Vec<&'static str> },

    /// The certificate URL failed the trust policy.
    #[error("The certificate is located on an invalid domain: {0}")]
    InvalidCertificateDomain(#[from] UntrustedCertificateUrl),

    #[error(transparent)]
    UnsupportedSignatureVersion(#[from] UnsupportedSignatureVersion),

    #[error("Certificate could not be retrieved: {0}")]
    CertificateRetrieval(#[from] CertificateError),

    /// The signature does not verify. The cause is only logged.
    #[error("The message signature is invalid.")]
    InvalidSignature,
}

impl From<SignatureError> for ValidationError {
    fn from(e: SignatureError) -> Self {
        match e {
            SignatureError::UnsupportedVersion(v) => Self::UnsupportedSignatureVersion(v),
            SignatureError::Invalid => Self::InvalidSignature,
        }
    }
}
