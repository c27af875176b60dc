//! # Public Key Loading
//!
//! Extracts an RSA public key from the PEM text served at `SigningCertURL`.
//! SNS serves X.509 certificates; bare SPKI and PKCS#1 public keys are also
//! accepted so that a pinned key can be used in place of a certificate.
//!
//! Only the first PEM block is read. The certificate is not validated in
//! any other way: no chain, no expiry, no revocation.

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;

use crate::error::CryptoError;

const LABEL_CERTIFICATE: &str = "CERTIFICATE";
const LABEL_PUBLIC_KEY: &str = "PUBLIC KEY";
const LABEL_RSA_PUBLIC_KEY: &str = "RSA PUBLIC KEY";

/// Load the RSA public key from a `CERTIFICATE`, `PUBLIC KEY` or
/// `RSA PUBLIC KEY` PEM block.
pub fn rsa_public_key_from_pem(pem: &str) -> Result<RsaPublicKey, CryptoError> {
    let (_, block) = x509_parser::pem::parse_x509_pem(pem.trim_start().as_bytes())
        .map_err(|e| CryptoError::Pem(e.to_string()))?;

    match block.label.as_str() {
        LABEL_CERTIFICATE => {
            let (_, cert) = x509_parser::parse_x509_certificate(&block.contents)
                .map_err(|e| CryptoError::Certificate(e.to_string()))?;
            RsaPublicKey::from_public_key_der(cert.public_key().raw)
                .map_err(|e| CryptoError::PublicKey(e.to_string()))
        }
        LABEL_PUBLIC_KEY => RsaPublicKey::from_public_key_der(&block.contents)
            .map_err(|e| CryptoError::PublicKey(e.to_string())),
        LABEL_RSA_PUBLIC_KEY => RsaPublicKey::from_pkcs1_der(&block.contents)
            .map_err(|e| CryptoError::PublicKey(e.to_string())),
        other => Err(CryptoError::UnsupportedPemLabel(other.to_string())),
    }
}
