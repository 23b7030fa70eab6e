//! Digest selection for the key derivation functions
//!
//! The derivation functions are configured by value, so the digest is an
//! enum dispatching to the `sha1` and `sha2` crates rather than a type
//! parameter.

use core::fmt;

use digest::Digest;
use ecka_params::utils::hash::{
    SHA1_OUTPUT_SIZE, SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
    SHA512_OUTPUT_SIZE,
};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Digest algorithms available to the derivation functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Output size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => SHA1_OUTPUT_SIZE,
            HashAlgorithm::Sha224 => SHA224_OUTPUT_SIZE,
            HashAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            HashAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
            HashAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    /// Standard name, e.g. `"SHA-256"`
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Hash the concatenation of `parts` into `out`
    ///
    /// `out` must be exactly [`output_size`](Self::output_size) bytes long.
    pub fn digest_into(self, parts: &[&[u8]], out: &mut [u8]) {
        match self {
            HashAlgorithm::Sha1 => run::<Sha1>(parts, out),
            HashAlgorithm::Sha224 => run::<Sha224>(parts, out),
            HashAlgorithm::Sha256 => run::<Sha256>(parts, out),
            HashAlgorithm::Sha384 => run::<Sha384>(parts, out),
            HashAlgorithm::Sha512 => run::<Sha512>(parts, out),
        }
    }

    /// Hash the concatenation of `parts`
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        let mut out = vec![0u8; self.output_size()];
        self.digest_into(parts, &mut out);
        out
    }
}

fn run<D: Digest>(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    out.copy_from_slice(&hasher.finalize());
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
