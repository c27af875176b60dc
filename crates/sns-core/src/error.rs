//! # Error Types
//!
//! Each pure pipeline stage reports its own error type. The orchestrator in
//! `sns-validator` maps these onto its validation taxonomy without wrapping
//! or suppressing them.

use std::fmt;

use thiserror::Error;

/// The input text could not be turned into an [`Envelope`](crate::Envelope).
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The text is not JSON at all.
    #[error("Message is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The text is JSON but the top level is not an object.
    #[error("Message is not a JSON object (found {0})")]
    NotAnObject(&'static str),
}

/// `SignatureVersion` carried a value outside the supported set.
///
/// The message names the offending value verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The signature version {0} is not supported.")]
pub struct UnsupportedSignatureVersion(pub String);

/// The trust pattern supplied at construction time does not compile.
#[derive(Error, Debug)]
pub enum TrustPolicyError {
    #[error("invalid certificate host pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// A certificate URL failed the trust policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{url:?} rejected: {reason}")]
pub struct UntrustedCertificateUrl {
    /// The URL as it appeared in the envelope (empty when absent).
    pub url: String,
    /// Which check rejected it.
    pub reason: UntrustedReason,
}

/// The specific check a certificate URL failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UntrustedReason {
    /// No certificate URL value in the envelope.
    Missing,
    /// The URL does not parse.
    Unparseable(String),
    /// The scheme is not `https`.
    InsecureScheme(String),
    /// The path does not end in `.pem`.
    NotPem,
    /// An explicit non-default port was given.
    UnexpectedPort(u16),
    /// The host is absent or does not match the trust pattern.
    UntrustedHost(String),
}

impl fmt::Display for UntrustedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no certificate URL present"),
            Self::Unparseable(e) => write!(f, "URL does not parse: {e}"),
            Self::InsecureScheme(s) => write!(f, "scheme {s:?} is not https"),
            Self::NotPem => write!(f, "path does not end in .pem"),
            Self::UnexpectedPort(p) => write!(f, "explicit port {p} is not allowed"),
            Self::UntrustedHost(h) => write!(f, "host {h:?} is not trusted"),
        }
    }
}
