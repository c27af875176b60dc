//! # Certificate Host Trust Policy
//!
//! Stops signature forgery by self-signed certificates: the certificate URL
//! in a message is attacker-controlled, so the certificate is only fetched
//! from hosts matching the trust pattern.
//!
//! ## Checks (all must pass)
//!
//! 1. The URL parses.
//! 2. The scheme is exactly `https`.
//! 3. The path ends in `.pem` (query and fragment are not considered).
//! 4. No explicit non-default port.
//! 5. The host matches the trust pattern in full.
//!
//! The pattern is always anchored to the whole host, so a caller-supplied
//! `sns\.example\.com` cannot be satisfied by `sns.example.com.attacker.net`.

use regex::Regex;
use url::Url;

use crate::envelope::Envelope;
use crate::error::{TrustPolicyError, UntrustedCertificateUrl, UntrustedReason};

/// Default trust pattern: SNS regional endpoints in the primary and China
/// partitions, e.g. `sns.us-east-1.amazonaws.com` and
/// `sns.cn-north-1.amazonaws.com.cn`.
pub const DEFAULT_HOST_PATTERN: &str = r"^sns\.[a-zA-Z0-9\-]{3,}\.amazonaws\.com(\.cn)?$";

/// Decides whether a signing certificate URL may be fetched.
#[derive(Debug, Clone)]
pub struct CertificateTrustPolicy {
    pattern: String,
    host: Regex,
}

impl CertificateTrustPolicy {
    /// Compile a policy from a host pattern.
    pub fn new(pattern: &str) -> Result<Self, TrustPolicyError> {
        let host = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            TrustPolicyError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            host,
        })
    }

    /// The pattern as supplied by the caller.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `host` matches the trust pattern.
    pub fn is_trusted_host(&self, host: &str) -> bool {
        self.host.is_match(host)
    }

    /// Validate a certificate URL, returning the parsed URL on success.
    pub fn validate(&self, url: &str) -> Result<Url, UntrustedCertificateUrl> {
        let reject = |reason| UntrustedCertificateUrl {
            url: url.to_string(),
            reason,
        };

        let parsed =
            Url::parse(url).map_err(|e| reject(UntrustedReason::Unparseable(e.to_string())))?;

        if parsed.scheme() != "https" {
            return Err(reject(UntrustedReason::InsecureScheme(
                parsed.scheme().to_string(),
            )));
        }
        if !parsed.path().ends_with(".pem") {
            return Err(reject(UntrustedReason::NotPem));
        }
        if let Some(port) = parsed.port() {
            return Err(reject(UntrustedReason::UnexpectedPort(port)));
        }

        let host = parsed.host_str().unwrap_or_default();
        if !self.is_trusted_host(host) {
            return Err(reject(UntrustedReason::UntrustedHost(host.to_string())));
        }

        Ok(parsed)
    }

    /// Validate the certificate URL carried by `envelope`, canonical field
    /// first, then its alternate casing.
    pub fn validate_envelope(&self, envelope: &Envelope) -> Result<Url, UntrustedCertificateUrl> {
        match envelope.signing_cert_url() {
            Some(url) => self.validate(url),
            None => Err(UntrustedCertificateUrl {
                url: String::new(),
                reason: UntrustedReason::Missing,
            }),
        }
    }
}
