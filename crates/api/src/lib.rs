//! Public API traits and types for the ecka library
//!
//! This crate provides the public API surface for the ecka key-agreement
//! crates: the error taxonomy shared by every layer and the traits the
//! agreement schemes, derivation functions and sessions implement.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{BasicAgreement, DerivationFunction, KeyAgreement};

// Re-export trait modules for direct access
pub use traits::{agreement, kdf};
