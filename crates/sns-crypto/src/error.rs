//! # Error Types
//!
//! [`CryptoError`] carries the precise reason a verification step failed and
//! stays inside this crate's logs. [`SignatureError`] is what callers see.

use sns_core::UnsupportedSignatureVersion;
use thiserror::Error;

/// Why a verification step failed.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The canonical string holds a character the encoding cannot express.
    #[error("character {character:?} cannot be encoded as {encoding}")]
    Unencodable {
        character: char,
        encoding: &'static str,
    },

    /// No PEM block could be read from the certificate text.
    #[error("certificate is not valid PEM: {0}")]
    Pem(String),

    /// The PEM block is not one of the accepted key containers.
    #[error("unsupported PEM block {0:?}")]
    UnsupportedPemLabel(String),

    /// The X.509 certificate failed to parse.
    #[error("certificate does not parse: {0}")]
    Certificate(String),

    /// The key material is not an RSA public key.
    #[error("public key is not a usable RSA key: {0}")]
    PublicKey(String),

    /// The `Signature` field is not valid base64.
    #[error("signature is not valid base64: {0}")]
    SignatureEncoding(#[from] base64::DecodeError),

    /// The signature does not match the canonical string under the key.
    #[error("signature does not match message")]
    Mismatch,
}

/// Outcome of a failed verification as seen by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error(transparent)]
    UnsupportedVersion(#[from] UnsupportedSignatureVersion),

    #[error("The message signature is invalid.")]
    Invalid,
}

/// A text encoding name that is not supported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported text encoding {0:?}, expected one of utf8, utf-8, latin1, binary")]
pub struct UnknownEncoding(pub String);
