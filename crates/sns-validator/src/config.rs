//! Validator configuration.
//!
//! Defaults accept certificates from SNS regional endpoints only, hash the
//! canonical string as UTF-8, and give certificate fetches 30 seconds.

use sns_cert_client::config::{env_timeout_secs, DEFAULT_TIMEOUT_SECS};
use sns_cert_client::CertificateError;
use sns_core::{TrustPolicyError, DEFAULT_HOST_PATTERN};
use sns_crypto::{TextEncoding, UnknownEncoding};

/// Construction parameters for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Regular expression a certificate host must match in full.
    pub host_pattern: String,
    /// Encoding applied to the canonical string before hashing.
    pub encoding: TextEncoding,
    /// Certificate fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            host_pattern: DEFAULT_HOST_PATTERN.to_string(),
            encoding: TextEncoding::default(),
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SNS_CERT_HOST_PATTERN` (default: SNS regional endpoints)
    /// - `SNS_SIGNATURE_ENCODING` (default: `utf8`; also `latin1`, `binary`)
    /// - `SNS_CERT_TIMEOUT_SECS` (default: 30)
    ///
    /// The host pattern is compiled when the validator is built, not here.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host_pattern: std::env::var("SNS_CERT_HOST_PATTERN")
                .unwrap_or(defaults.host_pattern),
            encoding: match std::env::var("SNS_SIGNATURE_ENCODING") {
                Ok(raw) => raw.parse()?,
                Err(_) => defaults.encoding,
            },
            fetch_timeout_secs: env_timeout_secs()?,
        })
    }
}

/// Errors raised while building a validator. Never raised by validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] sns_cert_client::ConfigError),

    #[error("SNS_SIGNATURE_ENCODING: {0}")]
    Encoding(#[from] UnknownEncoding),

    #[error(transparent)]
    TrustPolicy(#[from] TrustPolicyError),

    #[error(transparent)]
    HttpClient(#[from] CertificateError),
}
