//! Network seam for certificate retrieval.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::config::CertificateClientConfig;
use crate::error::CertificateError;

/// Retrieves the PEM text published at a certificate URL.
///
/// Implementations perform a single GET and succeed only on `200 OK` with
/// the full body decoded as text. Every other outcome, including transport
/// faults, is an error. Implementations do not cache and do not retry.
pub trait CertificateFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, CertificateError>> + Send;
}

/// [`CertificateFetcher`] over `reqwest` with rustls.
#[derive(Debug, Clone)]
pub struct HttpCertificateFetcher {
    http: reqwest::Client,
}

impl HttpCertificateFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new(config: &CertificateClientConfig) -> Result<Self, CertificateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| CertificateError::Client { source })?;
        Ok(Self { http })
    }

    /// Wrap an existing client, e.g. one shared with the host service.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl CertificateFetcher for HttpCertificateFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, CertificateError> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CertificateError::Http {
                url: url.to_string(),
                source,
            })?;

        if resp.status() != StatusCode::OK {
            return Err(CertificateError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(|source| CertificateError::Body {
            url: url.to_string(),
            source,
        })
    }
}
