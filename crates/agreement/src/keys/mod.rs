//! Key material for the agreement schemes
//!
//! Every key carries the [`DomainParameters`] it was issued under. Private
//! scalars are range-checked against the group order and public points are
//! validated against the curve when the key is built, so the schemes only
//! ever see well-formed material.

use core::fmt;
use std::sync::Arc;

use ecka_algorithms::{integer_to_bytes, DomainParameters};
use ecka_api::error::validate;
use ecka_api::{Error, Result};
use ecka_common::{EcPoint, SecretVec};
use ecka_internal::{ct_is_zero, strip_leading_zeros};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Leading byte of an uncompressed SEC1 point
const SEC1_UNCOMPRESSED: u8 = 0x04;

fn order_byte_length(domain: &DomainParameters) -> usize {
    (domain.order().bits() as usize + 7) / 8
}

/// A private scalar `d` in `[1, n-1]`
#[derive(Clone)]
pub struct PrivateKey {
    domain: Arc<DomainParameters>,
    d: SecretVec,
}

impl PrivateKey {
    /// Import a big-endian scalar
    ///
    /// Leading zero bytes are ignored. The value must lie in `[1, n-1]`.
    pub fn from_bytes(domain: &Arc<DomainParameters>, bytes: &[u8]) -> Result<Self> {
        validate::key(!ct_is_zero(bytes), "PrivateKey::from_bytes", "scalar is zero")?;
        let digits = strip_leading_zeros(bytes);
        validate::max_length(
            "PrivateKey::from_bytes",
            digits.len(),
            order_byte_length(domain),
        )?;
        Self::from_biguint(domain, &BigUint::from_bytes_be(digits))
    }

    /// Import a scalar given as an integer
    pub fn from_biguint(domain: &Arc<DomainParameters>, d: &BigUint) -> Result<Self> {
        validate::key(!d.is_zero(), "PrivateKey", "scalar is zero")?;
        validate::key(d < domain.order(), "PrivateKey", "scalar is not below the group order")?;
        let d = integer_to_bytes(d, order_byte_length(domain))?;
        Ok(Self {
            domain: Arc::clone(domain),
            d,
        })
    }

    /// Draw a fresh scalar uniformly from `[1, n-1]` by rejection sampling
    pub fn generate<R: RngCore + CryptoRng>(
        domain: &Arc<DomainParameters>,
        rng: &mut R,
    ) -> Result<Self> {
        let order = domain.order();
        let len = order_byte_length(domain);
        // Mask off the bits above bitlength(n) so each draw succeeds with
        // probability above one half
        let excess = len * 8 - order.bits() as usize;
        let mask = 0xffu8 >> excess;

        let mut buf = Zeroizing::new(vec![0u8; len]);
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= mask;
            if ct_is_zero(&buf) {
                continue;
            }
            let candidate = BigUint::from_bytes_be(&buf);
            if &candidate < order {
                return Self::from_biguint(domain, &candidate);
            }
        }
    }

    /// Domain parameters the scalar belongs to
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }

    /// The scalar as fixed-length big-endian bytes, scrubbed on drop
    pub fn to_bytes(&self) -> SecretVec {
        self.d.clone()
    }

    /// The scalar as an integer for the arithmetic layer
    pub(crate) fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(self.d.as_slice())
    }

    /// Compute the matching public key `d · G`
    pub fn public_key(&self) -> Result<PublicKey> {
        let point = self.domain.multiply_generator(&self.scalar())?;
        PublicKey::new(&self.domain, point)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.domain.name())
            .field("d", &"[REDACTED]")
            .finish()
    }
}

/// A validated public point `Q`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    domain: Arc<DomainParameters>,
    point: EcPoint,
}

impl PublicKey {
    /// Wrap a point, rejecting the identity, off-curve points and, on curves
    /// with a cofactor, points outside the prime-order subgroup
    pub fn new(domain: &Arc<DomainParameters>, point: EcPoint) -> Result<Self> {
        domain.validate_public_point(&point)?;
        Ok(Self {
            domain: Arc::clone(domain),
            point,
        })
    }

    /// Build a key from big-endian affine coordinates
    pub fn from_affine(domain: &Arc<DomainParameters>, x: &[u8], y: &[u8]) -> Result<Self> {
        let point = EcPoint::new_affine(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));
        Self::new(domain, point)
    }

    /// Parse an uncompressed SEC1 encoding `04 ‖ X ‖ Y`
    pub fn from_sec1(domain: &Arc<DomainParameters>, bytes: &[u8]) -> Result<Self> {
        let flen = domain.field_element_byte_length();
        validate::length("PublicKey::from_sec1", bytes.len(), 1 + 2 * flen)?;
        if bytes[0] != SEC1_UNCOMPRESSED {
            return Err(Error::invalid_key(
                "PublicKey::from_sec1",
                "only uncompressed points are supported",
            ));
        }
        Self::from_affine(domain, &bytes[1..=flen], &bytes[1 + flen..])
    }

    /// Uncompressed SEC1 encoding `04 ‖ X ‖ Y`
    pub fn to_sec1(&self) -> Result<Vec<u8>> {
        let flen = self.domain.field_element_byte_length();
        let (x, y) = match &self.point {
            EcPoint::Affine { x, y } => (x, y),
            EcPoint::Identity => {
                return Err(Error::invalid_key("PublicKey::to_sec1", "point at infinity"))
            }
        };
        let mut out = Vec::with_capacity(1 + 2 * flen);
        out.push(SEC1_UNCOMPRESSED);
        out.extend_from_slice(&integer_to_bytes(x, flen)?);
        out.extend_from_slice(&integer_to_bytes(y, flen)?);
        Ok(out)
    }

    /// Domain parameters the point belongs to
    pub fn domain(&self) -> &Arc<DomainParameters> {
        &self.domain
    }

    /// The point itself
    pub fn point(&self) -> &EcPoint {
        &self.point
    }
}

/// Local MQV material: a static key, an ephemeral key and optionally the
/// ephemeral public point
#[derive(Clone, Debug)]
pub struct MqvPrivateKey {
    static_key: PrivateKey,
    ephemeral_key: PrivateKey,
    ephemeral_public: Option<PublicKey>,
}

impl MqvPrivateKey {
    /// Bundle the local MQV keys; all of them must share domain parameters
    pub fn new(
        static_key: PrivateKey,
        ephemeral_key: PrivateKey,
        ephemeral_public: Option<PublicKey>,
    ) -> Result<Self> {
        validate::same_domain(
            DomainParameters::same_domain(static_key.domain(), ephemeral_key.domain()),
            "MqvPrivateKey",
            "static and ephemeral private keys use different domain parameters",
        )?;
        if let Some(public) = &ephemeral_public {
            validate::same_domain(
                DomainParameters::same_domain(static_key.domain(), public.domain()),
                "MqvPrivateKey",
                "ephemeral public key uses different domain parameters",
            )?;
        }
        Ok(Self {
            static_key,
            ephemeral_key,
            ephemeral_public,
        })
    }

    /// Long-term private key
    pub fn static_key(&self) -> &PrivateKey {
        &self.static_key
    }

    /// Ephemeral private key
    pub fn ephemeral_key(&self) -> &PrivateKey {
        &self.ephemeral_key
    }

    /// Ephemeral public point, if it was supplied
    pub fn ephemeral_public(&self) -> Option<&PublicKey> {
        self.ephemeral_public.as_ref()
    }
}

/// Remote MQV material: the other party's static and ephemeral public keys
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MqvPublicKey {
    static_key: PublicKey,
    ephemeral_key: PublicKey,
}

impl MqvPublicKey {
    /// Bundle the remote MQV keys; both must share domain parameters
    pub fn new(static_key: PublicKey, ephemeral_key: PublicKey) -> Result<Self> {
        validate::same_domain(
            DomainParameters::same_domain(static_key.domain(), ephemeral_key.domain()),
            "MqvPublicKey",
            "static and ephemeral public keys use different domain parameters",
        )?;
        Ok(Self {
            static_key,
            ephemeral_key,
        })
    }

    /// Long-term public key
    pub fn static_key(&self) -> &PublicKey {
        &self.static_key
    }

    /// Ephemeral public key
    pub fn ephemeral_key(&self) -> &PublicKey {
        &self.ephemeral_key
    }
}

/// Private material handed to a session's `init`
#[derive(Clone, Debug)]
pub enum LocalKeyMaterial {
    /// A single private key
    Plain(PrivateKey),
    /// A static/ephemeral MQV bundle
    Mqv(MqvPrivateKey),
}

impl LocalKeyMaterial {
    /// Domain parameters of the (static) private key
    pub fn domain(&self) -> &Arc<DomainParameters> {
        match self {
            LocalKeyMaterial::Plain(key) => key.domain(),
            LocalKeyMaterial::Mqv(key) => key.static_key().domain(),
        }
    }

    pub(crate) fn shape(&self) -> &'static str {
        match self {
            LocalKeyMaterial::Plain(_) => "plain private key",
            LocalKeyMaterial::Mqv(_) => "MQV private key",
        }
    }
}

impl From<PrivateKey> for LocalKeyMaterial {
    fn from(key: PrivateKey) -> Self {
        LocalKeyMaterial::Plain(key)
    }
}

impl From<MqvPrivateKey> for LocalKeyMaterial {
    fn from(key: MqvPrivateKey) -> Self {
        LocalKeyMaterial::Mqv(key)
    }
}

/// Public material handed to a session's `process_remote_key`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteKeyMaterial {
    /// A single public key
    Plain(PublicKey),
    /// A static/ephemeral MQV bundle
    Mqv(MqvPublicKey),
}

impl RemoteKeyMaterial {
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            RemoteKeyMaterial::Plain(_) => "plain public key",
            RemoteKeyMaterial::Mqv(_) => "MQV public key",
        }
    }
}

impl From<PublicKey> for RemoteKeyMaterial {
    fn from(key: PublicKey) -> Self {
        RemoteKeyMaterial::Plain(key)
    }
}

impl From<MqvPublicKey> for RemoteKeyMaterial {
    fn from(key: MqvPublicKey) -> Self {
        RemoteKeyMaterial::Mqv(key)
    }
}
