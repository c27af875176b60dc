//! # Signature Verifier
//!
//! Checks the `Signature` field of an envelope against the public key of its
//! signing certificate:
//!
//! 1. Select the digest from `SignatureVersion`: SHA1 for `1`, SHA256 for `2`.
//! 2. Build the [`CanonicalMessage`] and encode it with the configured
//!    [`TextEncoding`].
//! 3. Base64-decode the signature and verify RSASSA-PKCS1-v1_5 over the
//!    digest.
//!
//! ## Security Invariant
//!
//! Every cause of failure after the version gate (unreadable PEM, non-RSA
//! key, bad base64, unencodable text, mismatch) is reported as
//! [`SignatureError::Invalid`]. The cause is logged at `debug` only.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use sns_core::{Envelope, SignatureVersion};

use crate::canonical::CanonicalMessage;
use crate::encoding::TextEncoding;
use crate::error::{CryptoError, SignatureError};
use crate::key::rsa_public_key_from_pem;

/// Verifies SNS message signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureVerifier {
    encoding: TextEncoding,
}

impl SignatureVerifier {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Verify `envelope` against `certificate_pem`, reading the version from
    /// the envelope's `SignatureVersion` field.
    ///
    /// For standalone use. The `sns-validator` pipeline gates the version
    /// itself before fetching the certificate and calls
    /// [`verify_version`](Self::verify_version) instead.
    pub fn verify(&self, envelope: &Envelope, certificate_pem: &str) -> Result<(), SignatureError> {
        let version: SignatureVersion = envelope.signature_version().unwrap_or_default().parse()?;
        self.verify_version(envelope, version, certificate_pem)
    }

    /// Verify `envelope` with an already-parsed signature version.
    pub fn verify_version(
        &self,
        envelope: &Envelope,
        version: SignatureVersion,
        certificate_pem: &str,
    ) -> Result<(), SignatureError> {
        self.check(envelope, version, certificate_pem)
            .map_err(|cause| {
                tracing::debug!(
                    message_id = envelope.message_id().unwrap_or_default(),
                    version = %version,
                    error = %cause,
                    "signature verification failed"
                );
                SignatureError::Invalid
            })
    }

    fn check(
        &self,
        envelope: &Envelope,
        version: SignatureVersion,
        certificate_pem: &str,
    ) -> Result<(), CryptoError> {
        let data = CanonicalMessage::new(envelope).to_bytes(self.encoding)?;
        let signature = decode_signature(envelope.signature().unwrap_or_default())?;
        let key = rsa_public_key_from_pem(certificate_pem)?;
        verify_pkcs1v15(&key, version, &data, &signature)
    }
}

/// Base64-decode a signature, ignoring ASCII whitespace such as line wraps.
fn decode_signature(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

fn verify_pkcs1v15(
    key: &RsaPublicKey,
    version: SignatureVersion,
    data: &[u8],
    signature: &[u8],
) -> Result<(), CryptoError> {
    let outcome = match version {
        SignatureVersion::V1 => {
            key.verify(Pkcs1v15Sign::new::<Sha1>(), &Sha1::digest(data), signature)
        }
        SignatureVersion::V2 => {
            key.verify(Pkcs1v15Sign::new::<Sha256>(), &Sha256::digest(data), signature)
        }
    };
    outcome.map_err(|_| CryptoError::Mismatch)
}
