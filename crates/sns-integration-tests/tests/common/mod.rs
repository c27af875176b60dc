//! Shared fixtures for the integration tests.
//!
//! PEM keys and signed messages live in `testdata/` at the repository root.
//! The fixture messages were signed with `openssl dgst -sign`, independently
//! of the code under test.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use sns_cert_client::{CertificateError, CertificateFetcher, CertificateStore};
use sns_core::{Envelope, SignatureVersion};
use sns_crypto::{CanonicalMessage, TextEncoding};
use sns_validator::{Validator, ValidatorConfig};
use url::Url;

pub fn testdata(name: &str) -> String {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root above crates/sns-integration-tests")
        .join("testdata")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

pub fn signing_cert() -> String {
    testdata("signing-cert.pem")
}

pub fn attacker_cert() -> String {
    testdata("attacker-cert.pem")
}

pub fn envelope(name: &str) -> Envelope {
    Envelope::from_json(&testdata(name)).unwrap()
}

/// Serves one PEM for every URL, counting calls and recording URLs.
pub struct FixtureFetcher {
    pem: String,
    calls: AtomicUsize,
    urls: parking_lot::Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn serving(pem: String) -> Self {
        Self {
            pem,
            calls: AtomicUsize::new(0),
            urls: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

impl CertificateFetcher for FixtureFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, CertificateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().push(url.to_string());
        Ok(self.pem.clone())
    }
}

/// Fails every fetch with the given status.
pub struct FailingFetcher(pub u16);

impl CertificateFetcher for FailingFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, CertificateError> {
        Err(CertificateError::Status {
            url: url.to_string(),
            status: self.0,
        })
    }
}

/// A validator with default configuration whose certificates come from
/// `pem`.
pub fn validator_serving(pem: String) -> Validator<FixtureFetcher> {
    Validator::with_store(
        ValidatorConfig::default(),
        CertificateStore::new(FixtureFetcher::serving(pem)),
    )
    .unwrap()
}

pub fn validator() -> Validator<FixtureFetcher> {
    validator_serving(signing_cert())
}

pub fn fetch_calls(v: &Validator<FixtureFetcher>) -> usize {
    v.store().fetcher().calls()
}

/// Re-sign `envelope` in place with the key in `testdata/<key_file>`.
pub fn sign_with(
    envelope: &mut Envelope,
    key_file: &str,
    version: SignatureVersion,
    encoding: TextEncoding,
) {
    let key = RsaPrivateKey::from_pkcs8_pem(&testdata(key_file)).unwrap();
    let data = CanonicalMessage::new(envelope).to_bytes(encoding).unwrap();
    let signature = match version {
        SignatureVersion::V1 => key.sign(Pkcs1v15Sign::new::<Sha1>(), &Sha1::digest(&data)),
        SignatureVersion::V2 => key.sign(Pkcs1v15Sign::new::<Sha256>(), &Sha256::digest(&data)),
    }
    .unwrap();
    envelope.insert("SignatureVersion", version.as_str());
    envelope.insert("Signature", STANDARD.encode(signature));
}

pub fn sign(envelope: &mut Envelope, version: SignatureVersion) {
    sign_with(envelope, "signing-key.pem", version, TextEncoding::Utf8);
}
