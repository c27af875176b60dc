//! # sns-cert-client: Signing Certificate Retrieval
//!
//! Fetches the PEM text published at a message's `SigningCertURL` and keeps
//! it for the life of the store:
//!
//! - [`CertificateFetcher`]: the network seam. One GET, body on `200 OK`,
//!   error otherwise.
//! - [`HttpCertificateFetcher`]: the production fetcher over `reqwest`.
//! - [`CertificateStore`]: cache in front of a fetcher, keyed by URL.
//!
//! ## Crate Policy
//!
//! - No domain checks. Callers hand in URLs that already passed the trust
//!   policy in `sns-core`.
//! - No retries. A failed fetch is reported once and not cached.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod store;

pub use config::{CertificateClientConfig, ConfigError};
pub use error::CertificateError;
pub use fetcher::{CertificateFetcher, HttpCertificateFetcher};
pub use store::CertificateStore;
