//! # ecka
//!
//! Elliptic-curve key agreement: ECDH, cofactor ECDH and ECMQV, with
//! optional X9.63 KDF2 or NIST SP 800-56A concatenation key derivation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecka = "0.3"
//! ```
//!
//! ```
//! use ecka::prelude::*;
//!
//! let domain = DomainParameters::named(NamedCurve::P384).unwrap();
//! let alice = PrivateKey::from_bytes(&domain, &[0x0a; 48]).unwrap();
//! let bob = PrivateKey::from_bytes(&domain, &[0x0b; 48]).unwrap();
//! let (alice_pub, bob_pub) = (alice.public_key().unwrap(), bob.public_key().unwrap());
//!
//! let mut a = KeyAgreementSession::for_algorithm("ECCDHwithSHA384KDF").unwrap();
//! a.init(alice.into(), None).unwrap();
//! a.process_remote_key(bob_pub.into(), true).unwrap();
//!
//! let mut b = KeyAgreementSession::for_algorithm("ECCDHwithSHA384KDF").unwrap();
//! b.init(bob.into(), None).unwrap();
//! b.process_remote_key(alice_pub.into(), true).unwrap();
//!
//! assert_eq!(a.generate_key_for("AES256").unwrap(), b.generate_key_for("AES256").unwrap());
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: serialisation of curve names and configuration descriptors
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecka-api`]: error type and the agreement/KDF traits
//! - [`ecka-algorithms`]: curve arithmetic, fixed-length encoding, KDFs
//! - [`ecka-agreement`]: key material, schemes, configurations and sessions

#![forbid(unsafe_code)]

pub use ecka_agreement as agreement;
pub use ecka_algorithms as algorithms;
pub use ecka_api as api;
pub use ecka_common as common;
pub use ecka_internal as internal;
pub use ecka_params as params;

pub use ecka_agreement::create_session;

/// Common imports for ecka users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Core traits
    pub use crate::api::{BasicAgreement, DerivationFunction, KeyAgreement};

    // Curves and derivation
    pub use crate::algorithms::hash::HashAlgorithm;
    pub use crate::algorithms::kdf::{KdfKind, KeyDerivation};
    pub use crate::algorithms::{DomainParameters, NamedCurve};

    // Keys, parameters and sessions
    pub use crate::agreement::{
        create_session, AgreementConfiguration, AgreementScheme, KeyAgreementSession,
        LocalKeyMaterial, MqvParameterSpec, MqvPrivateKey, MqvPublicKey, ParameterSpec,
        PrivateKey, PublicKey, RemoteKeyMaterial, SessionState, UserKeyingMaterialSpec,
    };

    // Security types
    pub use crate::common::SecretVec;
}
