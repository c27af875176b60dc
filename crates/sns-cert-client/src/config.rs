//! Certificate client configuration.
//!
//! Defaults suit production. Override via environment variables or explicit
//! construction for testing.

/// Default request timeout for a certificate fetch.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpCertificateFetcher`](crate::HttpCertificateFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateClientConfig {
    /// Request timeout in seconds, covering connect through body read.
    pub timeout_secs: u64,
}

impl Default for CertificateClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CertificateClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SNS_CERT_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            timeout_secs: env_timeout_secs()?,
        })
    }
}

/// Read `SNS_CERT_TIMEOUT_SECS`, falling back to the default when unset.
pub fn env_timeout_secs() -> Result<u64, ConfigError> {
    env_parse("SNS_CERT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
}

fn env_parse(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw,
                expected: "a positive whole number of seconds",
            }),
            Ok(secs) => Ok(secs),
        },
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        var: String,
        value: String,
        expected: &'static str,
    },
}
