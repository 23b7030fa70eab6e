//! Trait definition for post-agreement key derivation

use crate::Result;
use zeroize::Zeroize;

/// A key derivation function stretching a shared secret to a requested length.
pub trait DerivationFunction {
    /// Derived key material
    type Output: AsRef<[u8]> + Zeroize;

    /// Returns the KDF name, e.g. `"KDF2(SHA-256)"`.
    fn name(&self) -> String;

    /// Maximum number of bytes a single call can produce.
    fn max_output_length(&self) -> usize;

    /// Derive exactly `length` bytes from `secret`, bound to `shared_info`.
    fn derive(&self, secret: &[u8], shared_info: Option<&[u8]>, length: usize)
        -> Result<Self::Output>;
}
