//! # Pipeline Orchestrator
//!
//! Runs the validation stages in order and maps each stage's failure onto
//! [`ValidationError`]. Every local check (structure, certificate host,
//! signature version) runs before the certificate fetch, so a message that
//! can be rejected offline never causes network traffic.

use sns_cert_client::{
    CertificateClientConfig, CertificateFetcher, CertificateStore, HttpCertificateFetcher,
};
use sns_core::{normalize, CertificateTrustPolicy, Envelope, SignatureVersion};
use sns_crypto::SignatureVerifier;

use crate::config::{ConfigError, ValidatorConfig};
use crate::error::ValidationError;
use crate::input::ValidationInput;

/// Validates SNS messages against their signing certificates.
///
/// Cheap to share: wrap in an `Arc` or borrow across tasks. Cloning a
/// validator shares its certificate cache.
#[derive(Debug)]
pub struct Validator<F = HttpCertificateFetcher> {
    trust: CertificateTrustPolicy,
    verifier: SignatureVerifier,
    store: CertificateStore<F>,
}

impl<F> Clone for Validator<F> {
    fn clone(&self) -> Self {
        Self {
            trust: self.trust.clone(),
            verifier: self.verifier,
            store: self.store.clone(),
        }
    }
}

impl Validator {
    /// Build a validator with an HTTPS fetcher and a fresh certificate cache.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let fetcher = HttpCertificateFetcher::new(&CertificateClientConfig {
            timeout_secs: config.fetch_timeout_secs,
        })?;
        Self::with_store(config, CertificateStore::new(fetcher))
    }

    /// Build a validator from `SNS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ValidatorConfig::from_env()?)
    }
}

impl<F> Validator<F> {
    /// Build a validator around an existing store.
    ///
    /// Passing a clone of another validator's store shares its cache. The
    /// store's fetcher is used as is; `config.fetch_timeout_secs` does not
    /// apply to it.
    pub fn with_store(config: ValidatorConfig, store: CertificateStore<F>) -> Result<Self, ConfigError> {
        Ok(Self {
            trust: CertificateTrustPolicy::new(&config.host_pattern)?,
            verifier: SignatureVerifier::new(config.encoding),
            store,
        })
    }

    pub fn store(&self) -> &CertificateStore<F> {
        &self.store
    }

    pub fn trust_policy(&self) -> &CertificateTrustPolicy {
        &self.trust
    }

    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }
}

impl<F: CertificateFetcher> Validator<F> {
    /// Validate a message, returning the normalized envelope on success.
    pub async fn validate(
        &self,
        input: impl Into<ValidationInput>,
    ) -> Result<Envelope, ValidationError> {
        let mut envelope = match input.into() {
            ValidationInput::Text(text) => Envelope::from_json(&text)?,
            ValidationInput::Json(value) => Envelope::from_value(value)?,
            ValidationInput::Envelope(envelope) => envelope,
        };

        normalize(&mut envelope);

        let missing = sns_core::missing_fields(&envelope);
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "message missing required fields");
            return Err(ValidationError::MissingRequiredFields { missing });
        }

        let cert_url = self.trust.validate_envelope(&envelope).map_err(|e| {
            tracing::warn!(
                url = %e.url,
                reason = %e.reason,
                message_id = envelope.message_id().unwrap_or_default(),
                "rejected signing certificate URL"
            );
            e
        })?;

        let version: SignatureVersion = envelope.signature_version().unwrap_or_default().parse()?;

        let pem = self.store.fetch(&cert_url).await?;

        self.verifier.verify_version(&envelope, version, &pem)?;

        tracing::debug!(
            message_id = envelope.message_id().unwrap_or_default(),
            message_type = envelope.get(sns_core::fields::TYPE).unwrap_or_default(),
            version = %version,
            "message signature verified"
        );
        Ok(envelope)
    }

    /// Validate a message and hand the outcome to `completion`, which is
    /// called exactly once.
    pub async fn validate_with<C, R>(&self, input: impl Into<ValidationInput>, completion: C) -> R
    where
        C: FnOnce(Result<Envelope, ValidationError>) -> R,
    {
        completion(self.validate(input).await)
    }
}
