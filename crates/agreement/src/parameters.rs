//! Parameter objects accepted by a session's `init`

use crate::keys::{PrivateKey, PublicKey};

/// User keying material bound into the KDF as its shared/other info
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserKeyingMaterialSpec {
    ukm: Vec<u8>,
}

impl UserKeyingMaterialSpec {
    /// Wrap the given bytes
    pub fn new(ukm: impl Into<Vec<u8>>) -> Self {
        Self { ukm: ukm.into() }
    }

    /// The keying material
    pub fn as_bytes(&self) -> &[u8] {
        &self.ukm
    }

    /// Take the bytes out
    pub fn into_bytes(self) -> Vec<u8> {
        self.ukm
    }
}

/// Ephemeral keys for an MQV session whose `init` receives only a static key
///
/// The spec can also carry the other party's ephemeral public key, in which
/// case `process_remote_key` accepts the bare remote static key.
#[derive(Clone, Debug)]
pub struct MqvParameterSpec {
    ephemeral_private: PrivateKey,
    ephemeral_public: Option<PublicKey>,
    other_party_ephemeral: Option<PublicKey>,
    user_keying_material: Option<Vec<u8>>,
}

impl MqvParameterSpec {
    /// Start from the local ephemeral private key
    pub fn new(ephemeral_private: PrivateKey) -> Self {
        Self {
            ephemeral_private,
            ephemeral_public: None,
            other_party_ephemeral: None,
            user_keying_material: None,
        }
    }

    /// Supply the local ephemeral public key instead of recomputing it
    pub fn with_ephemeral_public(mut self, key: PublicKey) -> Self {
        self.ephemeral_public = Some(key);
        self
    }

    /// Supply the other party's ephemeral public key
    pub fn with_other_party_ephemeral(mut self, key: PublicKey) -> Self {
        self.other_party_ephemeral = Some(key);
        self
    }

    /// Attach user keying material for the KDF
    pub fn with_user_keying_material(mut self, ukm: impl Into<Vec<u8>>) -> Self {
        self.user_keying_material = Some(ukm.into());
        self
    }

    /// Local ephemeral private key
    pub fn ephemeral_private(&self) -> &PrivateKey {
        &self.ephemeral_private
    }

    /// Local ephemeral public key, if supplied
    pub fn ephemeral_public(&self) -> Option<&PublicKey> {
        self.ephemeral_public.as_ref()
    }

    /// The other party's ephemeral public key, if supplied
    pub fn other_party_ephemeral(&self) -> Option<&PublicKey> {
        self.other_party_ephemeral.as_ref()
    }

    /// User keying material, if supplied
    pub fn user_keying_material(&self) -> Option<&[u8]> {
        self.user_keying_material.as_deref()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (PrivateKey, Option<PublicKey>, Option<PublicKey>, Option<Vec<u8>>) {
        (
            self.ephemeral_private,
            self.ephemeral_public,
            self.other_party_ephemeral,
            self.user_keying_material,
        )
    }
}

/// Optional parameter object for `init`
#[derive(Clone, Debug)]
pub enum ParameterSpec {
    /// User keying material for the KDF
    UserKeyingMaterial(UserKeyingMaterialSpec),
    /// MQV ephemeral keys, optionally with user keying material
    Mqv(MqvParameterSpec),
}

impl From<UserKeyingMaterialSpec> for ParameterSpec {
    fn from(spec: UserKeyingMaterialSpec) -> Self {
        ParameterSpec::UserKeyingMaterial(spec)
    }
}

impl From<MqvParameterSpec> for ParameterSpec {
    fn from(spec: MqvParameterSpec) -> Self {
        ParameterSpec::Mqv(spec)
    }
}
