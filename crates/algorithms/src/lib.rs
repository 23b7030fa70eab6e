//! Elliptic-curve and key-derivation primitives for ecka
//!
//! This crate provides the building blocks the agreement schemes are made
//! from:
//!
//! - [`ec`]: domain parameters and the point-arithmetic backends behind the
//!   [`CurveArithmetic`] trait
//! - [`encoding`]: the fixed-length field element encoder
//! - [`hash`]: digest selection for the derivation functions
//! - [`kdf`]: X9.63 KDF2 and the NIST SP 800-56A concatenation KDF

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{CurveArithmetic, DomainParameters, NamedCurve};

// Fixed-length encoding
pub mod encoding;
pub use encoding::integer_to_bytes;

// Digest selection
pub mod hash;
pub use hash::HashAlgorithm;

// KDF implementations
pub mod kdf;
pub use kdf::{ConcatenationKdf, Kdf2, KdfKind, KeyDerivation};
