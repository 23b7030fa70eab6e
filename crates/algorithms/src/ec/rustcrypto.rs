//! Point arithmetic backed by the RustCrypto curve crates
//!
//! Points cross the boundary as uncompressed SEC1 encodings, so every
//! incoming point is checked against the curve equation by the backend
//! crate itself. Scalars are reduced modulo the group order before use,
//! which is exact on these prime-order curves.

use ecka_common::EcPoint;
use num_bigint::BigUint;
use zeroize::Zeroize;

use super::CurveArithmetic;
use crate::error::{Error, Result};

macro_rules! rustcrypto_arithmetic {
    ($name:ident, $krate:ident, $curve:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            order: BigUint,
        }

        impl $name {
            /// Backend for a curve whose generator has order `order`
            pub fn new(order: BigUint) -> Self {
                Self { order }
            }

            fn field_bytes(value: &BigUint) -> Option<$krate::FieldBytes> {
                let bytes = value.to_bytes_be();
                let mut out = $krate::FieldBytes::default();
                if bytes.len() > out.len() {
                    return None;
                }
                let offset = out.len() - bytes.len();
                out[offset..].copy_from_slice(&bytes);
                Some(out)
            }

            fn to_projective(point: &EcPoint) -> Result<$krate::ProjectivePoint> {
                use $krate::elliptic_curve::sec1::FromEncodedPoint;

                let (x, y) = match point {
                    EcPoint::Identity => return Ok($krate::ProjectivePoint::IDENTITY),
                    EcPoint::Affine { x, y } => (x, y),
                };
                let invalid = Error::InvalidPoint {
                    curve: $curve,
                    reason: "point is not on the curve",
                };
                let x = Self::field_bytes(x).ok_or_else(|| invalid.clone())?;
                let y = Self::field_bytes(y).ok_or_else(|| invalid.clone())?;
                let encoded = $krate::EncodedPoint::from_affine_coordinates(&x, &y, false);
                Option::<$krate::ProjectivePoint>::from($krate::ProjectivePoint::from_encoded_point(&encoded))
                    .ok_or(invalid)
            }

            fn from_projective(point: &$krate::ProjectivePoint) -> EcPoint {
                use $krate::elliptic_curve::sec1::ToEncodedPoint;

                let encoded = point.to_encoded_point(false);
                match (encoded.x(), encoded.y()) {
                    (Some(x), Some(y)) => EcPoint::Affine {
                        x: BigUint::from_bytes_be(x),
                        y: BigUint::from_bytes_be(y),
                    },
                    _ => EcPoint::Identity,
                }
            }

            fn to_scalar(&self, k: &BigUint) -> Result<$krate::Scalar> {
                use $krate::elliptic_curve::ff::PrimeField;

                let reduced = k % &self.order;
                let mut repr = Self::field_bytes(&reduced).ok_or(Error::Processing {
                    operation: "scalar conversion",
                    details: "reduced scalar wider than the field",
                })?;
                let scalar = Option::<$krate::Scalar>::from($krate::Scalar::from_repr(repr));
                repr.as_mut_slice().zeroize();
                scalar.ok_or(Error::Processing {
                    operation: "scalar conversion",
                    details: "scalar is not canonical",
                })
            }
        }

        impl CurveArithmetic for $name {
            fn backend_name(&self) -> &'static str {
                concat!(stringify!($krate), " (RustCrypto)")
            }

            fn scalar_multiply(&self, point: &EcPoint, scalar: &BigUint) -> Result<EcPoint> {
                let point = Self::to_projective(point)?;
                let scalar = self.to_scalar(scalar)?;
                Ok(Self::from_projective(&(&point * &scalar)))
            }

            fn point_add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint> {
                let a = Self::to_projective(a)?;
                let b = Self::to_projective(b)?;
                Ok(Self::from_projective(&(&a + &b)))
            }

            fn is_on_curve(&self, point: &EcPoint) -> bool {
                Self::to_projective(point).is_ok()
            }
        }
    };
}

rustcrypto_arithmetic!(P256Arithmetic, p256, "P-256", "NIST P-256 arithmetic from the `p256` crate");
rustcrypto_arithmetic!(P384Arithmetic, p384, "P-384", "NIST P-384 arithmetic from the `p384` crate");
rustcrypto_arithmetic!(
    Secp256k1Arithmetic,
    k256,
    "secp256k1",
    "secp256k1 arithmetic from the `k256` crate"
);
