//! ANSI X9.63 / ISO 18033-2 KDF2

use ecka_api::{DerivationFunction, Result as ApiResult};
use ecka_common::SecretVec;

use super::{counter_mode, max_output_length};
use crate::hash::HashAlgorithm;

/// KDF2: block `i` is `H(Z ‖ i ‖ SharedInfo)`, counting from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kdf2 {
    hash: HashAlgorithm,
}

impl Kdf2 {
    /// KDF2 over `hash`
    pub const fn new(hash: HashAlgorithm) -> Self {
        Self { hash }
    }
}

impl DerivationFunction for Kdf2 {
    type Output = SecretVec;

    fn name(&self) -> String {
        format!("KDF2({})", self.hash.name())
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
        let info = shared_info.unwrap_or_default();
        let hash = self.hash;
        let out = counter_mode(hash, length, "KDF2 output", |counter, block| {
            hash.digest_into(&[secret, &counter[..], info], block)
        })?;
        Ok(out)
    }
}
