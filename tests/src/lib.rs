//! Testing utilities for the ecka library
//!
//! Deterministic key material and two-party session drivers shared by the
//! integration tests, property tests and benchmarks.

use std::sync::Arc;

use ecka_agreement::{
    AgreementConfiguration, KeyAgreementSession, LocalKeyMaterial, MqvPrivateKey, MqvPublicKey,
    PrivateKey, PublicKey, RemoteKeyMaterial,
};
use ecka_algorithms::{DomainParameters, NamedCurve};
use ecka_api::{KeyAgreement, Result};
use ecka_common::SecretVec;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Seeded generator so failures reproduce
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Built-in parameters with the default backend
pub fn domain(curve: NamedCurve) -> Arc<DomainParameters> {
    DomainParameters::named(curve).expect("built-in curve")
}

/// A private key with its public key
pub struct Party {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl Party {
    /// Fresh key pair from `rng`
    pub fn generate(domain: &Arc<DomainParameters>, rng: &mut ChaCha20Rng) -> Self {
        let private = PrivateKey::generate(domain, rng).expect("key generation");
        let public = private.public_key().expect("public key");
        Self { private, public }
    }

    /// Key pair from a hex scalar
    pub fn from_hex(domain: &Arc<DomainParameters>, scalar: &str) -> Self {
        let bytes = hex::decode(scalar).expect("hex scalar");
        let private = PrivateKey::from_bytes(domain, &bytes).expect("scalar in range");
        let public = private.public_key().expect("public key");
        Self { private, public }
    }
}

/// Static and ephemeral key pairs for one MQV participant
pub struct MqvParty {
    pub static_pair: Party,
    pub ephemeral_pair: Party,
}

impl MqvParty {
    /// Fresh static and ephemeral pairs from `rng`
    pub fn generate(domain: &Arc<DomainParameters>, rng: &mut ChaCha20Rng) -> Self {
        Self {
            static_pair: Party::generate(domain, rng),
            ephemeral_pair: Party::generate(domain, rng),
        }
    }

    /// Local MQV bundle
    pub fn private(&self) -> MqvPrivateKey {
        MqvPrivateKey::new(
            self.static_pair.private.clone(),
            self.ephemeral_pair.private.clone(),
            Some(self.ephemeral_pair.public.clone()),
        )
        .expect("same domain")
    }

    /// Remote MQV bundle
    pub fn public(&self) -> MqvPublicKey {
        MqvPublicKey::new(
            self.static_pair.public.clone(),
            self.ephemeral_pair.public.clone(),
        )
        .expect("same domain")
    }
}

/// Run one side of a session to `derive_secret(length)`
pub fn run_session(
    config: AgreementConfiguration,
    local: LocalKeyMaterial,
    remote: RemoteKeyMaterial,
    length: usize,
) -> Result<SecretVec> {
    let mut session = KeyAgreementSession::new(config);
    session.init(local, None)?;
    session.process_remote_key(remote, true)?;
    session.derive_secret(length)
}

/// Both sides of a plain or cofactor exchange
pub fn exchange(
    config: AgreementConfiguration,
    a: &Party,
    b: &Party,
    length: usize,
) -> Result<(SecretVec, SecretVec)> {
    let left = run_session(config, a.private.clone().into(), b.public.clone().into(), length)?;
    let right = run_session(config, b.private.clone().into(), a.public.clone().into(), length)?;
    Ok((left, right))
}

/// Both sides of an MQV exchange
pub fn mqv_exchange(
    config: AgreementConfiguration,
    a: &MqvParty,
    b: &MqvParty,
    length: usize,
) -> Result<(SecretVec, SecretVec)> {
    let left = run_session(config, a.private().into(), b.public().into(), length)?;
    let right = run_session(config, b.private().into(), a.public().into(), length)?;
    Ok((left, right))
}
