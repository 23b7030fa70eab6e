// File: crates/api/src/traits/agreement.rs

//! Trait definitions for elliptic-curve key agreement
//!
//! Two layers are described here. A [`BasicAgreement`] is the raw
//! combination rule (plain, cofactor or MQV) turning one side's private
//! material and the other side's public material into a shared field
//! element. A [`KeyAgreement`] is the stateful two-party protocol wrapped
//! around it.

use crate::Result;
use zeroize::Zeroize;

/// A raw agreement rule producing a shared secret from validated key material.
///
/// # Security Note
/// Implementations must check that all participating keys share domain
/// parameters before performing any arithmetic.
pub trait BasicAgreement {
    /// Private key material consumed by this rule
    type PrivateKey;

    /// Public key material consumed by this rule
    type PublicKey;

    /// Shared secret produced by this rule.
    ///
    /// # Security Note
    /// Implements `Zeroize`; it is scrubbed as soon as it goes out of scope.
    type Secret: Zeroize;

    /// Returns the name of the rule, e.g. `"ECDH"`.
    fn algorithm_name(&self) -> &'static str;

    /// Compute the shared secret.
    fn calculate_agreement(
        &self,
        private: &Self::PrivateKey,
        public: &Self::PublicKey,
    ) -> Result<Self::Secret>;
}

/// A single-phase, two-party key agreement protocol.
///
/// The protocol runs `init`, then `process_remote_key` exactly once with
/// `is_final_round = true`, then one or more calls to `derive_secret`.
pub trait KeyAgreement {
    /// Local private key material
    type LocalKey;

    /// Remote public key material
    type RemoteKey;

    /// Optional parameter object accepted by `init`
    type Parameters;

    /// Bytes handed to the caller
    type Output: Zeroize;

    /// Returns the configured algorithm name.
    fn algorithm_name(&self) -> &'static str;

    /// Bind the local key material and any parameters.
    fn init(&mut self, local: Self::LocalKey, params: Option<Self::Parameters>) -> Result<()>;

    /// Consume the remote key material and compute the raw shared secret.
    fn process_remote_key(&mut self, remote: Self::RemoteKey, is_final_round: bool) -> Result<()>;

    /// Produce `requested_length` bytes of keying material.
    fn derive_secret(&mut self, requested_length: usize) -> Result<Self::Output>;
}
