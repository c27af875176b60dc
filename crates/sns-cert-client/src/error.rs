//! Error types for certificate retrieval.

/// Why a signing certificate could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Connection, TLS or timeout failure.
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than `200 OK`.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text.
    #[error("GET {url} returned an unreadable body: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
