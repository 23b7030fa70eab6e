//! The two-party key agreement session
//!
//! A session moves through four states:
//!
//! ```text
//! Uninitialized --init--> Initialized --process_remote_key--> PhaseCompleted
//!                                                               |
//!                                          derive_secret / generate_*
//!                                                               v
//!                                                         SecretComputed
//! ```
//!
//! Calls made out of order fail with `IllegalState`. A failed
//! `process_remote_key` leaves the session in `Initialized`. Once the secret
//! exists it may be derived again, with any length.

use core::fmt;
use std::sync::Arc;

use ecka_algorithms::DomainParameters;
use ecka_api::error::validate;
use ecka_api::{DerivationFunction, Error, KeyAgreement, Result, ResultExt};
use ecka_common::SecretVec;
use ecka_params::utils::symmetric::key_size_bits;
use log::{debug, warn};

use crate::config::AgreementConfiguration;
use crate::keys::{LocalKeyMaterial, MqvPrivateKey, MqvPublicKey, PublicKey, RemoteKeyMaterial};
use crate::parameters::ParameterSpec;
use crate::scheme::SharedSecret;

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Created, no key material yet
    Uninitialized,
    /// Local key material bound
    Initialized,
    /// Remote key processed, raw secret held
    PhaseCompleted,
    /// At least one output produced
    SecretComputed,
}

/// One run of a named key agreement configuration
pub struct KeyAgreementSession {
    config: AgreementConfiguration,
    state: SessionState,
    domain: Option<Arc<DomainParameters>>,
    local: Option<LocalKeyMaterial>,
    other_party_ephemeral: Option<PublicKey>,
    ukm: Option<Vec<u8>>,
    secret: Option<SharedSecret>,
}

/// Start a session for `config`
pub fn create_session(config: AgreementConfiguration) -> KeyAgreementSession {
    KeyAgreementSession::new(config)
}

impl KeyAgreementSession {
    /// Fresh session in the `Uninitialized` state
    pub fn new(config: AgreementConfiguration) -> Self {
        Self {
            config,
            state: SessionState::Uninitialized,
            domain: None,
            local: None,
            other_party_ephemeral: None,
            ukm: None,
            secret: None,
        }
    }

    /// Fresh session for the configuration registered under `name`
    pub fn for_algorithm(name: &str) -> Result<Self> {
        AgreementConfiguration::by_name(name).map(Self::new)
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The configuration this session runs
    pub fn configuration(&self) -> AgreementConfiguration {
        self.config
    }

    /// Domain parameters of the local key, once initialised
    pub fn domain_parameters(&self) -> Option<&Arc<DomainParameters>> {
        self.domain.as_ref()
    }

    /// The secret at its natural length: the field element length of the
    /// curve, passed through the KDF when one is configured
    pub fn generate_secret(&mut self) -> Result<SecretVec> {
        let length = self.natural_length("generate_secret")?;
        self.produce("generate_secret", length)
    }

    /// Write [`generate_secret`](Self::generate_secret) into `out`,
    /// returning the number of bytes written
    pub fn generate_secret_into(&mut self, out: &mut [u8]) -> Result<usize> {
        let length = self.natural_length("generate_secret_into")?;
        validate::min_length("generate_secret_into", out.len(), length)?;
        let secret = self.produce("generate_secret_into", length)?;
        out[..secret.len()].copy_from_slice(&secret);
        Ok(secret.len())
    }

    /// Key material sized for a named symmetric algorithm
    ///
    /// With a KDF the output is derived at the algorithm's key size and an
    /// unknown algorithm is rejected. Without one the encoded secret is
    /// truncated to the key size, or returned whole for an unknown algorithm.
    pub fn generate_key_for(&mut self, algorithm: &str) -> Result<SecretVec> {
        const OP: &str = "generate_key_for";
        self.require_secret(OP)?;
        let bits = key_size_bits(algorithm);

        if self.config.kdf().is_some() {
            let bits = bits.ok_or_else(|| {
                Error::unsupported(OP, format!("no key size known for algorithm {algorithm}"))
            })?;
            return self.produce(OP, bits / 8);
        }

        let mut secret = self.produce(OP, 0)?;
        if let Some(bits) = bits {
            let wanted = bits / 8;
            validate::min_length(OP, secret.len(), wanted)?;
            secret.truncate(wanted);
        }
        Ok(secret)
    }

    fn illegal(&self, operation: &'static str, message: &'static str) -> Error {
        warn!("{}: {operation} rejected: {message}", self.config.name());
        Error::illegal_state(operation, self.config.name(), message)
    }

    fn require_secret(&self, operation: &'static str) -> Result<&SharedSecret> {
        match (self.state, &self.secret) {
            (SessionState::PhaseCompleted | SessionState::SecretComputed, Some(secret)) => {
                Ok(secret)
            }
            _ => Err(self.illegal(operation, "phase not completed")),
        }
    }

    fn natural_length(&self, operation: &'static str) -> Result<usize> {
        let secret = self.require_secret(operation)?;
        Ok(secret.domain().field_element_byte_length())
    }

    // Encode the raw secret and run it through the KDF, if any
    fn produce(&mut self, operation: &'static str, length: usize) -> Result<SecretVec> {
        let secret = self.require_secret(operation)?;
        let encoded = secret.encode()?;
        let out = match self.config.kdf() {
            Some(kdf) => kdf
                .derivation()
                .derive(&encoded, self.ukm.as_deref(), length)
                .with_context(operation)?,
            None => encoded,
        };
        if self.state != SessionState::SecretComputed {
            debug!("{}: secret computed", self.config.name());
        }
        self.state = SessionState::SecretComputed;
        Ok(out)
    }

    fn bind_remote(&self, remote: RemoteKeyMaterial) -> Result<RemoteKeyMaterial> {
        let scheme = self.config.scheme();
        match (scheme.is_mqv(), remote) {
            (false, remote @ RemoteKeyMaterial::Plain(_)) => Ok(remote),
            (true, remote @ RemoteKeyMaterial::Mqv(_)) => Ok(remote),
            (true, RemoteKeyMaterial::Plain(static_key)) => match &self.other_party_ephemeral {
                Some(ephemeral) => Ok(MqvPublicKey::new(static_key, ephemeral.clone())?.into()),
                None => Err(Error::key_shape(
                    scheme.name(),
                    "needs an MQV public key, or the other party's ephemeral key in MqvParameterSpec",
                )),
            },
            (false, remote) => Err(Error::key_shape(
                scheme.name(),
                format!("expects a plain public key, got a {}", remote.shape()),
            )),
        }
    }
}

impl KeyAgreement for KeyAgreementSession {
    type LocalKey = LocalKeyMaterial;
    type RemoteKey = RemoteKeyMaterial;
    type Parameters = ParameterSpec;
    type Output = SecretVec;

    fn algorithm_name(&self) -> &'static str {
        self.config.name()
    }

    fn init(&mut self, local: LocalKeyMaterial, params: Option<ParameterSpec>) -> Result<()> {
        if self.state != SessionState::Uninitialized {
            return Err(self.illegal("init", "session already initialised"));
        }
        let scheme = self.config.scheme();

        let (ukm, mqv) = match params {
            None => (None, None),
            Some(ParameterSpec::UserKeyingMaterial(spec)) => (Some(spec.into_bytes()), None),
            Some(ParameterSpec::Mqv(spec)) if scheme.is_mqv() => {
                let (ephemeral, ephemeral_public, other, ukm) = spec.into_parts();
                (ukm, Some((ephemeral, ephemeral_public, other)))
            }
            Some(ParameterSpec::Mqv(_)) => {
                return Err(Error::unsupported(
                    "init",
                    format!("{} does not take MQV parameters", self.config.name()),
                ))
            }
        };
        if ukm.is_some() && self.config.kdf().is_none() {
            return Err(Error::unsupported(
                "init",
                format!(
                    "user keying material requires a KDF, {} has none",
                    self.config.name()
                ),
            ));
        }

        let (local, other_party_ephemeral): (LocalKeyMaterial, Option<PublicKey>) =
            match (scheme.is_mqv(), local, mqv) {
                (false, local @ LocalKeyMaterial::Plain(_), None) => (local, None),
                (true, local @ LocalKeyMaterial::Mqv(_), spec) => {
                    (local, spec.and_then(|(_, _, other)| other))
                }
                (true, LocalKeyMaterial::Plain(static_key), Some((ephemeral, public, other))) => {
                    (MqvPrivateKey::new(static_key, ephemeral, public)?.into(), other)
                }
                (true, LocalKeyMaterial::Plain(_), None) => {
                    return Err(Error::key_shape(
                        scheme.name(),
                        "needs an MQV private key, or a static key with MqvParameterSpec",
                    ))
                }
                (false, local, _) => {
                    return Err(Error::key_shape(
                        scheme.name(),
                        format!("expects a plain private key, got a {}", local.shape()),
                    ))
                }
            };

        self.domain = Some(Arc::clone(local.domain()));
        self.local = Some(local);
        self.other_party_ephemeral = other_party_ephemeral;
        self.ukm = ukm;
        self.state = SessionState::Initialized;
        debug!(
            "{}: initialised on {}",
            self.config.name(),
            self.domain.as_ref().map_or("?", |d| d.name())
        );
        Ok(())
    }

    fn process_remote_key(&mut self, remote: RemoteKeyMaterial, is_final_round: bool) -> Result<()> {
        const OP: &str = "process_remote_key";
        match self.state {
            SessionState::Initialized => {}
            SessionState::Uninitialized => return Err(self.illegal(OP, "not initialised")),
            _ => return Err(self.illegal(OP, "phase already completed")),
        }
        if !is_final_round {
            return Err(self.illegal(OP, "can only be between two parties"));
        }

        let remote = self.bind_remote(remote)?;
        let local = self
            .local
            .as_ref()
            .ok_or_else(|| self.illegal(OP, "local key material missing"))?;
        let secret = self.config.scheme().calculate(local, &remote)?;

        // Scrubs the private scalars
        self.local = None;
        self.secret = Some(secret);
        self.state = SessionState::PhaseCompleted;
        debug!("{}: phase completed", self.config.name());
        Ok(())
    }

    fn derive_secret(&mut self, requested_length: usize) -> Result<SecretVec> {
        self.produce("derive_secret", requested_length)
    }
}

impl fmt::Debug for KeyAgreementSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAgreementSession")
            .field("algorithm", &self.config.name())
            .field("state", &self.state)
            .field("domain", &self.domain.as_ref().map(|d| d.name()))
            .finish_non_exhaustive()
    }
}
