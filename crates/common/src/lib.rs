//! Common implementations and shared functionality for the ecka library
//!
//! This crate provides the secret containers and curve data types used
//! across the ecka components.

#![forbid(unsafe_code)]

pub mod ec_common;
pub mod security;

// Re-export core security types
pub use security::SecretVec;

pub use ec_common::{CurveParams, EcPoint};
