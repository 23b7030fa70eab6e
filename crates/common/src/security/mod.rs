//! Security primitives for handling sensitive key-agreement material
//!
//! Private scalars, raw shared secrets and derived keys all live in
//! [`SecretVec`] so they are scrubbed when dropped.

pub mod secret;

pub use secret::SecretVec;
