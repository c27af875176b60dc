//! # sns-crypto: Signature Verification
//!
//! Turns an envelope plus a signing certificate into a yes/no answer:
//!
//! - **Canonical string** construction over the version- and type-dependent
//!   field set ([`CanonicalMessage`]).
//! - **Text encoding** of the canonical string before hashing
//!   ([`TextEncoding`]).
//! - **PEM key loading** from certificates, SPKI and PKCS#1 blocks
//!   ([`rsa_public_key_from_pem`]).
//! - **RSA PKCS#1 v1.5** verification over SHA1 (version 1) or SHA256
//!   (version 2) ([`SignatureVerifier`]).
//!
//! ## Security Invariant
//!
//! Every verification failure collapses into [`SignatureError::Invalid`].
//! Callers cannot tell a bad PEM from a bad signature; the cause is only
//! visible in `debug` logs.
//!
//! ## Crate Policy
//!
//! - Depends only on `sns-core` internally.
//! - No certificate chain, expiry or revocation checks.
//! - Tests verify real signatures produced by an independent signer.

pub mod canonical;
pub mod encoding;
pub mod error;
pub mod key;
pub mod verifier;

pub use canonical::CanonicalMessage;
pub use encoding::TextEncoding;
pub use error::{CryptoError, SignatureError, UnknownEncoding};
pub use key::rsa_public_key_from_pem;
pub use verifier::SignatureVerifier;
