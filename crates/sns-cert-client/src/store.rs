//! # Certificate Store
//!
//! Caches signing certificates by URL in front of a [`CertificateFetcher`].
//!
//! ## Cache Semantics
//!
//! - Unbounded. Entries are never evicted or expired; SNS rotates
//!   certificates by publishing them under a new URL.
//! - Only successful fetches are cached.
//! - Owned by the store instance. Clones share the cache; separately
//!   constructed stores do not.
//! - Concurrent first fetches of the same URL are not coalesced. Each goes
//!   to the network and the last one to finish writes the entry.
//!
//! The lock is held only for map reads and writes, never across the fetch.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use crate::error::CertificateError;
use crate::fetcher::{CertificateFetcher, HttpCertificateFetcher};

/// Certificate cache backed by a fetcher.
#[derive(Debug)]
pub struct CertificateStore<F = HttpCertificateFetcher> {
    fetcher: Arc<F>,
    cache: Arc<RwLock<HashMap<String, Arc<str>>>>,
}

impl<F> Clone for CertificateStore<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<F> CertificateStore<F> {
    /// Create a store with an empty cache.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The cached certificate for `url`, without touching the network.
    pub fn get(&self, url: &Url) -> Option<Arc<str>> {
        self.cache.read().get(url.as_str()).cloned()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.cache.read().contains_key(url.as_str())
    }

    /// Pin a certificate for `url`. Later fetches of `url` are served from
    /// the cache and never reach the network.
    pub fn insert(&self, url: &Url, pem: impl Into<Arc<str>>) {
        self.cache.write().insert(url.as_str().to_string(), pem.into());
    }

    /// Number of cached certificates.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl<F: CertificateFetcher> CertificateStore<F> {
    /// Return the certificate for `url`, fetching and caching it on a miss.
    pub async fn fetch(&self, url: &Url) -> Result<Arc<str>, CertificateError> {
        if let Some(pem) = self.get(url) {
            tracing::debug!(url = %url, "signing certificate served from cache");
            return Ok(pem);
        }

        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let pem: Arc<str> = Arc::from(body);
                self.insert(url, Arc::clone(&pem));
                tracing::info!(url = %url, bytes = pem.len(), "cached signing certificate");
                Ok(pem)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "signing certificate retrieval failed");
                Err(e)
            }
        }
    }
}
