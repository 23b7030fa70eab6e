//! The raw agreement rules
//!
//! Each rule is a unit struct implementing [`BasicAgreement`].
//! [`AgreementScheme`] names the rule a configuration uses and dispatches
//! tagged key material to it.

use core::fmt;
use std::sync::Arc;

use ecka_algorithms::{integer_to_bytes, DomainParameters};
use ecka_api::{BasicAgreement, Error, Result};
use ecka_common::{EcPoint, SecretVec};
use log::trace;
use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::keys::{LocalKeyMaterial, RemoteKeyMaterial};

mod ecdh;
mod mqv;

pub use ecdh::{EcdhBasicAgreement, EcdhcBasicAgreement};
pub use mqv::EcmqvBasicAgreement;

/// The x-coordinate of an agreed point, scrubbed on drop
///
/// Only the minimal big-endian magnitude is held; [`SharedSecret::encode`]
/// produces the fixed-length form.
#[derive(Clone)]
pub struct SharedSecret {
    domain: Arc<DomainParameters>,
    magnitude: SecretVec,
}

impl SharedSecret {
    /// Extract the secret from an agreed point
    pub(crate) fn from_point(
        domain: &Arc<DomainParameters>,
        point: &EcPoint,
        scheme: &'static str,
    ) -> Result<Self> {
        let x = point.x().ok_or_else(|| Error::AgreementFailed {
            context: scheme,
            message: "Infinity is not a valid agreement value".into(),
        })?;
        Ok(Self {
            domain: Arc::clone(domain),
            magnitude: SecretVec::new(x.to_bytes_be()),
        })
    }

    /// Domain parameters the secret was agreed under
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }

    /// Big-endian encoding padded to the field element length of the curve
    pub fn encode(&self) -> Result<SecretVec> {
        let value = BigUint::from_bytes_be(self.magnitude.as_slice());
        Ok(integer_to_bytes(&value, self.domain.field_element_byte_length())?)
    }
}

impl Zeroize for SharedSecret {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        DomainParameters::same_domain(&self.domain, &other.domain)
            && self.magnitude == other.magnitude
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("curve", &self.domain.name())
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// The agreement rule a configuration selects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgreementScheme {
    /// ECDH: `x(d · Q)`
    Plain,
    /// Cofactor ECDH: `x((h · d) · Q)`
    Cofactor,
    /// ECMQV
    Mqv,
}

impl AgreementScheme {
    /// Conventional name of the rule
    pub const fn name(self) -> &'static str {
        match self {
            AgreementScheme::Plain => "ECDH",
            AgreementScheme::Cofactor => "ECDHC",
            AgreementScheme::Mqv => "ECMQV",
        }
    }

    /// Whether the rule takes static/ephemeral key bundles
    pub const fn is_mqv(self) -> bool {
        matches!(self, AgreementScheme::Mqv)
    }

    /// Run the rule over tagged key material
    ///
    /// The ECDH rules take plain keys on both sides, ECMQV takes bundles on
    /// both sides. Any other pairing fails with `InvalidKeyShape`.
    pub fn calculate(
        self,
        local: &LocalKeyMaterial,
        remote: &RemoteKeyMaterial,
    ) -> Result<SharedSecret> {
        trace!(
            "{}: agreeing {} with {}",
            self.name(),
            local.shape(),
            remote.shape()
        );
        match (self, local, remote) {
            (AgreementScheme::Plain, LocalKeyMaterial::Plain(d), RemoteKeyMaterial::Plain(q)) => {
                EcdhBasicAgreement.calculate_agreement(d, q)
            }
            (
                AgreementScheme::Cofactor,
                LocalKeyMaterial::Plain(d),
                RemoteKeyMaterial::Plain(q),
            ) => EcdhcBasicAgreement.calculate_agreement(d, q),
            (AgreementScheme::Mqv, LocalKeyMaterial::Mqv(d), RemoteKeyMaterial::Mqv(q)) => {
                EcmqvBasicAgreement.calculate_agreement(d, q)
            }
            _ => Err(Error::key_shape(
                self.name(),
                format!(
                    "cannot combine a {} with a {}",
                    local.shape(),
                    remote.shape()
                ),
            )),
        }
    }
}

impl fmt::Display for AgreementScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
