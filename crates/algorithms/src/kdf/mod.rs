//! Counter-mode key derivation functions
//!
//! Both functions stretch a shared secret `Z` with a 32-bit big-endian block
//! counter starting at 1, concatenating digest outputs and truncating to the
//! requested length. They differ only in how each digest input is framed:
//!
//! | Function | Digest input for block `i` |
//! |----------|----------------------------|
//! | [`Kdf2`] (ANSI X9.63, ISO 18033-2) | `Z ‖ i ‖ SharedInfo` |
//! | [`ConcatenationKdf`] (NIST SP 800-56A) | `i ‖ Z ‖ OtherInfo` |
//!
//! The counter is always present, even when one block suffices.
//!
//! ## Example usage
//!
//! ```
//! use ecka_algorithms::hash::HashAlgorithm;
//! use ecka_algorithms::kdf::Kdf2;
//! use ecka_api::DerivationFunction;
//!
//! let kdf = Kdf2::new(HashAlgorithm::Sha256);
//! let key = kdf.derive(b"shared secret", Some(&b"context"[..]), 42).unwrap();
//! assert_eq!(key.len(), 42);
//! ```

use core::fmt;

use ecka_api::{DerivationFunction, Result as ApiResult};
use ecka_common::SecretVec;
use ecka_internal::u32_to_be_bytes;
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use crate::hash::HashAlgorithm;

mod concat;
mod kdf2;

pub use concat::ConcatenationKdf;
pub use kdf2::Kdf2;

/// The two framings a configuration can select
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KdfKind {
    /// X9.63 KDF2: `H(Z ‖ counter ‖ SharedInfo)`
    Kdf2,
    /// SP 800-56A concatenation KDF: `H(counter ‖ Z ‖ OtherInfo)`
    Concatenation,
}

impl KdfKind {
    /// Short name of the framing
    pub const fn name(self) -> &'static str {
        match self {
            KdfKind::Kdf2 => "KDF2",
            KdfKind::Concatenation => "ConcatKDF",
        }
    }
}

/// A derivation function chosen at run time: framing plus digest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyDerivation {
    kind: KdfKind,
    hash: HashAlgorithm,
}

impl KeyDerivation {
    /// Combine a framing with a digest
    pub const fn new(kind: KdfKind, hash: HashAlgorithm) -> Self {
        Self { kind, hash }
    }

    /// The framing
    pub const fn kind(&self) -> KdfKind {
        self.kind
    }

    /// The digest
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }
}

impl fmt::Display for KeyDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.hash.name())
    }
}

impl DerivationFunction for KeyDerivation {
    type Output = SecretVec;

    fn name(&self) -> String {
        self.to_string()
    }

    fn max_output_length(&self) -> usize {
        max_output_length(self.hash)
    }

    fn derive(
        &self,
        secret: &[u8],
        shared_info: Option<&[u8]>,
        length: usize,
    ) -> ApiResult<SecretVec> {
        match self.kind {
            KdfKind::Kdf2 => Kdf2::new(self.hash).derive(secret, shared_info, length),
            KdfKind::Concatenation => {
                ConcatenationKdf::new(self.hash).derive(secret, shared_info, length)
            }
        }
    }
}

/// Largest output a 32-bit counter can address: `(2^32 - 1) · hashLen`
pub fn max_output_length(hash: HashAlgorithm) -> usize {
    (u32::MAX as usize).saturating_mul(hash.output_size())
}

/// Shared counter loop: `fill_block` hashes one block for the given counter
fn counter_mode<F>(
    hash: HashAlgorithm,
    length: usize,
    context: &'static str,
    mut fill_block: F,
) -> Result<SecretVec>
where
    F: FnMut(&[u8; 4], &mut [u8]),
{
    validate::max_length(context, length, max_output_length(hash))?;

    let block_len = hash.output_size();
    let mut out = SecretVec::zeroed(length);
    let mut block = Zeroizing::new(vec![0u8; block_len]);
    for (i, chunk) in out.as_mut_slice().chunks_mut(block_len).enumerate() {
        // i + 1 fits in u32: length was bounded above
        let counter = u32_to_be_bytes(i as u32 + 1);
        fill_block(&counter, &mut block);
        chunk.copy_from_slice(&block[..chunk.len()]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
