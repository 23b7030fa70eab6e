//! Affine reference arithmetic for short Weierstrass curves over prime fields
//!
//! Works on any curve `y^2 = x^3 + ax + b (mod p)`. Operations are not
//! constant time; the backend exists for curves without a dedicated
//! implementation and for cross-checking the optimised ones.

use ecka_common::{CurveParams, EcPoint};
use num_bigint::BigUint;
use num_traits::Zero;

use super::CurveArithmetic;
use crate::error::{validate, Error, Result};

/// Reference arithmetic on one short Weierstrass curve
#[derive(Clone, Debug)]
pub struct WeierstrassArithmetic {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl WeierstrassArithmetic {
    /// Arithmetic for the curve described by `params`
    pub fn new(params: &CurveParams) -> Self {
        Self {
            name: params.name,
            p: params.p.clone(),
            a: params.a.clone(),
            b: params.b.clone(),
        }
    }

    fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        ((x + &self.p) - (y % &self.p)) % &self.p
    }

    fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.p
    }

    // p is prime, so v^(p-2) is the inverse of any non-zero v.
    fn inverse(&self, v: &BigUint) -> Result<BigUint> {
        if (v % &self.p).is_zero() {
            return Err(Error::Processing {
                operation: "field inversion",
                details: "zero has no inverse",
            });
        }
        let exponent = &self.p - BigUint::from(2u32);
        Ok(v.modpow(&exponent, &self.p))
    }

    fn double(&self, point: &EcPoint) -> Result<EcPoint> {
        let (x, y) = match point {
            EcPoint::Identity => return Ok(EcPoint::Identity),
            EcPoint::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Ok(EcPoint::Identity);
        }
        // lambda = (3x^2 + a) / 2y
        let numerator = (BigUint::from(3u32) * self.mul(x, x) + &self.a) % &self.p;
        let denominator = (BigUint::from(2u32) * y) % &self.p;
        let lambda = self.mul(&numerator, &self.inverse(&denominator)?);
        self.finish(&lambda, x, x, y)
    }

    fn add(&self, p1: &EcPoint, p2: &EcPoint) -> Result<EcPoint> {
        let ((x1, y1), (x2, y2)) = match (p1, p2) {
            (EcPoint::Identity, other) | (other, EcPoint::Identity) => return Ok(other.clone()),
            (EcPoint::Affine { x: x1, y: y1 }, EcPoint::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };
        if x1 == x2 {
            if ((y1 + y2) % &self.p).is_zero() {
                return Ok(EcPoint::Identity);
            }
            return self.double(p1);
        }
        // lambda = (y2 - y1) / (x2 - x1)
        let lambda = self.mul(&self.sub(y2, y1), &self.inverse(&self.sub(x2, x1))?);
        self.finish(&lambda, x1, x2, y1)
    }

    // x3 = lambda^2 - x1 - x2, y3 = lambda(x1 - x3) - y1
    fn finish(&self, lambda: &BigUint, x1: &BigUint, x2: &BigUint, y1: &BigUint) -> Result<EcPoint> {
        let x3 = self.sub(&self.sub(&self.mul(lambda, lambda), x1), x2);
        let y3 = self.sub(&self.mul(lambda, &self.sub(x1, &x3)), y1);
        Ok(EcPoint::Affine { x: x3, y: y3 })
    }
}

impl CurveArithmetic for WeierstrassArithmetic {
    fn backend_name(&self) -> &'static str {
        "affine reference"
    }

    fn scalar_multiply(&self, point: &EcPoint, scalar: &BigUint) -> Result<EcPoint> {
        validate::point(self.is_on_curve(point), self.name, "point is not on the curve")?;
        if scalar.is_zero() || point.is_identity() {
            return Ok(EcPoint::Identity);
        }
        let mut acc = EcPoint::Identity;
        for i in (0..scalar.bits()).rev() {
            acc = self.double(&acc)?;
            if scalar.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }
        Ok(acc)
    }

    fn point_add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint> {
        validate::point(self.is_on_curve(a), self.name, "point is not on the curve")?;
        validate::point(self.is_on_curve(b), self.name, "point is not on the curve")?;
        self.add(a, b)
    }

    fn is_on_curve(&self, point: &EcPoint) -> bool {
        match point {
            EcPoint::Identity => true,
            EcPoint::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = self.mul(y, y);
                let rhs = (self.mul(&self.mul(x, x), x) + self.mul(&self.a, x) + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }
}
