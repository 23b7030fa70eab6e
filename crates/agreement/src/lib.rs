//! Elliptic-curve key agreement sessions
//!
//! This crate implements the three agreement rules of SEC 1 and
//! ANSI X9.63 over the domain parameters of `ecka-algorithms`:
//!
//! - ECDH: the x-coordinate of `d · Q`
//! - ECDHC: cofactor Diffie-Hellman, the x-coordinate of `(h · d) · Q`
//! - ECMQV: the Menezes-Qu-Vanstone combination of a static and an
//!   ephemeral key pair on each side
//!
//! A [`KeyAgreementSession`] drives one two-party exchange for a named
//! [`AgreementConfiguration`], optionally stretching the raw secret with
//! X9.63 KDF2 or the NIST SP 800-56A concatenation KDF.
//!
//! # Example
//!
//! ```
//! use ecka_agreement::{create_session, AgreementConfiguration, PrivateKey};
//! use ecka_algorithms::{DomainParameters, NamedCurve};
//! use ecka_api::KeyAgreement;
//!
//! let domain = DomainParameters::named(NamedCurve::P256).unwrap();
//! let alice = PrivateKey::from_bytes(&domain, &[0x11; 32]).unwrap();
//! let bob = PrivateKey::from_bytes(&domain, &[0x22; 32]).unwrap();
//! let bob_public = bob.public_key().unwrap();
//! let alice_public = alice.public_key().unwrap();
//!
//! let config = AgreementConfiguration::by_name("ECDHwithSHA256KDF").unwrap();
//! let mut a = create_session(config);
//! a.init(alice.into(), None).unwrap();
//! a.process_remote_key(bob_public.into(), true).unwrap();
//!
//! let mut b = create_session(config);
//! b.init(bob.into(), None).unwrap();
//! b.process_remote_key(alice_public.into(), true).unwrap();
//!
//! assert_eq!(a.derive_secret(32).unwrap(), b.derive_secret(32).unwrap());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod keys;
pub mod parameters;
pub mod scheme;
pub mod session;

pub use config::{AgreementConfiguration, KdfSpec, CONFIGURATIONS};
pub use keys::{
    LocalKeyMaterial, MqvPrivateKey, MqvPublicKey, PrivateKey, PublicKey, RemoteKeyMaterial,
};
pub use parameters::{MqvParameterSpec, ParameterSpec, UserKeyingMaterialSpec};
pub use scheme::{
    AgreementScheme, EcdhBasicAgreement, EcdhcBasicAgreement, EcmqvBasicAgreement, SharedSecret,
};
pub use session::{create_session, KeyAgreementSession, SessionState};
