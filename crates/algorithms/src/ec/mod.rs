//! Elliptic curve domain parameters and point arithmetic
//!
//! Curve arithmetic sits behind [`CurveArithmetic`] so the agreement schemes
//! never depend on a particular backend. Two families of backend ship here:
//!
//! - RustCrypto curves ([`P256Arithmetic`], [`P384Arithmetic`],
//!   [`Secp256k1Arithmetic`]) for the prime-order production curves
//! - [`WeierstrassArithmetic`], an affine reference implementation over
//!   arbitrary-precision integers that handles any short Weierstrass curve
//!   over a prime field, including curves with a cofactor above one
//!
//! [`DomainParameters`] bundles a curve definition with its backend and is
//! shared between keys as `Arc<DomainParameters>`.

use core::fmt;
use std::sync::Arc;

use ecka_common::{CurveParams, EcPoint};
use ecka_params::traditional::ecdh::{self as constants, CurveConstants};
use log::trace;
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{validate, Error, Result};

mod rustcrypto;
mod weierstrass;

pub use rustcrypto::{P256Arithmetic, P384Arithmetic, Secp256k1Arithmetic};
pub use weierstrass::WeierstrassArithmetic;

/// Point arithmetic on one fixed curve.
///
/// Implementations must reject points that do not lie on their curve.
pub trait CurveArithmetic: Send + Sync + fmt::Debug {
    /// Short description of the backend, used in log output
    fn backend_name(&self) -> &'static str;

    /// Compute `scalar · point`.
    ///
    /// The scalar is not reduced by the caller; it may exceed the group order
    /// (the cofactor variants pass `h · d`).
    fn scalar_multiply(&self, point: &EcPoint, scalar: &BigUint) -> Result<EcPoint>;

    /// Compute `a + b`.
    fn point_add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint>;

    /// Whether `point` satisfies the curve equation. The identity is on every curve.
    fn is_on_curve(&self, point: &EcPoint) -> bool;
}

/// Curves with built-in domain parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedCurve {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// secp256k1
    Secp256k1,
    /// secp112r2 (cofactor 4)
    Secp112r2,
}

impl NamedCurve {
    /// Every built-in curve
    pub const ALL: [NamedCurve; 4] = [
        NamedCurve::P256,
        NamedCurve::P384,
        NamedCurve::Secp256k1,
        NamedCurve::Secp112r2,
    ];

    /// Published constants for this curve
    pub fn constants(self) -> &'static CurveConstants {
        match self {
            NamedCurve::P256 => &constants::P256,
            NamedCurve::P384 => &constants::P384,
            NamedCurve::Secp256k1 => &constants::SECP256K1,
            NamedCurve::Secp112r2 => &constants::SECP112R2,
        }
    }

    /// Canonical curve name
    pub fn name(self) -> &'static str {
        self.constants().name
    }

    /// Look a curve up by its canonical name or a common alias
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "p-256" | "p256" | "secp256r1" | "prime256v1" => Some(NamedCurve::P256),
            "p-384" | "p384" | "secp384r1" => Some(NamedCurve::P384),
            "secp256k1" | "k256" => Some(NamedCurve::Secp256k1),
            "secp112r2" => Some(NamedCurve::Secp112r2),
            _ => None,
        }
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Curve identity, generator, order and cofactor, bound to an arithmetic backend.
///
/// Equality compares the curve definition only; two instances backed by
/// different arithmetic implementations of the same curve are equal.
#[derive(Clone)]
pub struct DomainParameters {
    params: CurveParams,
    arithmetic: Arc<dyn CurveArithmetic>,
}

impl DomainParameters {
    /// Bind a curve definition to a backend, checking the generator is on the curve
    pub fn new(params: CurveParams, arithmetic: Arc<dyn CurveArithmetic>) -> Result<Self> {
        validate::point(
            arithmetic.is_on_curve(&params.generator),
            params.name,
            "generator does not satisfy the curve equation",
        )?;
        Ok(Self { params, arithmetic })
    }

    /// Built-in parameters with the default backend for the curve
    ///
    /// RustCrypto arithmetic is used where available; secp112r2 runs on the
    /// reference backend.
    pub fn named(curve: NamedCurve) -> Result<Arc<Self>> {
        let params = Self::load(curve)?;
        let arithmetic: Arc<dyn CurveArithmetic> = match curve {
            NamedCurve::P256 => Arc::new(P256Arithmetic::new(params.order.clone())),
            NamedCurve::P384 => Arc::new(P384Arithmetic::new(params.order.clone())),
            NamedCurve::Secp256k1 => Arc::new(Secp256k1Arithmetic::new(params.order.clone())),
            NamedCurve::Secp112r2 => Arc::new(WeierstrassArithmetic::new(&params)),
        };
        Ok(Arc::new(Self::new(params, arithmetic)?))
    }

    /// Built-in parameters on the reference backend
    pub fn reference(curve: NamedCurve) -> Result<Arc<Self>> {
        let params = Self::load(curve)?;
        let arithmetic = Arc::new(WeierstrassArithmetic::new(&params));
        Ok(Arc::new(Self::new(params, arithmetic)?))
    }

    fn load(curve: NamedCurve) -> Result<CurveParams> {
        CurveParams::from_constants(curve.constants())
            .map_err(|_| Error::param(curve.name(), "malformed built-in curve constants"))
    }

    /// Curve identity
    pub fn name(&self) -> &'static str {
        self.params.name
    }

    /// Full curve definition
    pub fn curve_params(&self) -> &CurveParams {
        &self.params
    }

    /// Generator point G
    pub fn generator(&self) -> &EcPoint {
        &self.params.generator
    }

    /// Order n of the generator
    pub fn order(&self) -> &BigUint {
        &self.params.order
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.params.cofactor
    }

    /// Field size in bits
    pub fn field_size(&self) -> usize {
        self.params.field_size()
    }

    /// Byte length of a fixed-length field element encoding, `⌈bits(p)/8⌉`
    pub fn field_element_byte_length(&self) -> usize {
        self.params.field_byte_length()
    }

    /// The arithmetic backend
    pub fn arithmetic(&self) -> &dyn CurveArithmetic {
        self.arithmetic.as_ref()
    }

    /// `scalar · point` on this curve
    pub fn scalar_multiply(&self, point: &EcPoint, scalar: &BigUint) -> Result<EcPoint> {
        trace!(
            "{}: scalar multiplication on {}",
            self.params.name,
            self.arithmetic.backend_name()
        );
        self.arithmetic.scalar_multiply(point, scalar)
    }

    /// `a + b` on this curve
    pub fn point_add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint> {
        self.arithmetic.point_add(a, b)
    }

    /// `scalar · G`
    pub fn multiply_generator(&self, scalar: &BigUint) -> Result<EcPoint> {
        self.scalar_multiply(&self.params.generator, scalar)
    }

    /// Check that `point` is usable as a public key on this curve.
    ///
    /// The point must satisfy the curve equation and must not be the
    /// identity. On curves with a cofactor above one it must also lie in the
    /// subgroup generated by G.
    pub fn validate_public_point(&self, point: &EcPoint) -> Result<()> {
        validate::point(!point.is_identity(), self.params.name, "point at infinity")?;
        validate::point(
            self.arithmetic.is_on_curve(point),
            self.params.name,
            "point does not satisfy the curve equation",
        )?;
        if !self.params.cofactor.is_one() {
            let check = self.arithmetic.scalar_multiply(point, &self.params.order)?;
            validate::point(
                check.is_identity(),
                self.params.name,
                "point is outside the prime-order subgroup",
            )?;
        }
        Ok(())
    }

    /// Whether `a` and `b` describe the same curve, short-circuiting on shared handles
    pub fn same_domain(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b) || a.params == b.params
    }
}

impl PartialEq for DomainParameters {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for DomainParameters {}

impl fmt::Debug for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParameters")
            .field("curve", &self.params.name)
            .field("field_bits", &self.params.field_size())
            .field("cofactor", &self.params.cofactor)
            .field("backend", &self.arithmetic.backend_name())
            .finish()
    }
}
