//! Common elliptic curve data types
//!
//! Curve-independent representations of points and short Weierstrass domain
//! parameters. Arithmetic on them lives in `ecka-algorithms`; this module only
//! carries data.

use ecka_api::{Error, Result};
use ecka_params::traditional::ecdh::CurveConstants;
use num_bigint::BigUint;
use num_traits::Zero;

/// Point on an elliptic curve in affine coordinates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EcPoint {
    /// The point at infinity
    Identity,
    /// An affine point (x, y)
    Affine { x: BigUint, y: BigUint },
}

impl EcPoint {
    /// Create a new affine point (x, y)
    pub fn new_affine(x: BigUint, y: BigUint) -> Self {
        Self::Affine { x, y }
    }

    /// Parse an affine point from big-endian hex coordinates
    pub fn from_hex(x: &str, y: &str) -> Result<Self> {
        Ok(Self::Affine {
            x: parse_hex("EcPoint::from_hex", x)?,
            y: parse_hex("EcPoint::from_hex", y)?,
        })
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// The affine x-coordinate as an integer, `None` at infinity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Affine { x, .. } => Some(x),
            Self::Identity => None,
        }
    }

    /// The affine y-coordinate as an integer, `None` at infinity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Affine { y, .. } => Some(y),
            Self::Identity => None,
        }
    }
}

/// Elliptic curve parameters in short Weierstrass form: y^2 = x^3 + ax + b
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Curve identity, e.g. `"P-256"`
    pub name: &'static str,

    /// The prime field modulus
    pub p: BigUint,

    /// The 'a' coefficient
    pub a: BigUint,

    /// The 'b' coefficient
    pub b: BigUint,

    /// Generator point
    pub generator: EcPoint,

    /// The order of the generator
    pub order: BigUint,

    /// The cofactor
    pub cofactor: BigUint,
}

impl CurveParams {
    /// Build curve parameters from their published hex constants
    pub fn from_constants(c: &CurveConstants) -> Result<Self> {
        let params = Self {
            name: c.name,
            p: parse_hex(c.name, c.p)?,
            a: parse_hex(c.name, c.a)?,
            b: parse_hex(c.name, c.b)?,
            generator: EcPoint::from_hex(c.gx, c.gy)?,
            order: parse_hex(c.name, c.n)?,
            cofactor: BigUint::from(c.h),
        };
        params.check()?;
        Ok(params)
    }

    /// Bit length of the field prime
    pub fn field_size(&self) -> usize {
        self.p.bits() as usize
    }

    /// Number of bytes in a fixed-length field element encoding
    pub fn field_byte_length(&self) -> usize {
        (self.field_size() + 7) / 8
    }

    /// Bit length of the group order
    pub fn order_bits(&self) -> usize {
        self.order.bits() as usize
    }

    fn check(&self) -> Result<()> {
        if self.p.is_zero() || self.order.is_zero() || self.cofactor.is_zero() {
            return Err(Error::invalid_parameter(
                self.name,
                "modulus, order and cofactor must be non-zero",
            ));
        }
        if self.a >= self.p || self.b >= self.p {
            return Err(Error::invalid_parameter(
                self.name,
                "curve coefficients must be reduced modulo p",
            ));
        }
        if self.generator.is_identity() {
            return Err(Error::invalid_parameter(self.name, "generator is the identity"));
        }
        Ok(())
    }
}

fn parse_hex(context: &'static str, s: &str) -> Result<BigUint> {
    let bytes = hex::decode(s).map_err(|e| Error::invalid_parameter(context, e.to_string()))?;
    Ok(BigUint::from_bytes_be(&bytes))
}
