//! Trait definitions for key agreement and key derivation

pub mod agreement;
pub mod kdf;

pub use agreement::{BasicAgreement, KeyAgreement};
pub use kdf::DerivationFunction;
