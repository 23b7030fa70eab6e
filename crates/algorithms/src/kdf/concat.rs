//! NIST SP 800-56A single-step concatenation KDF

use ecka_api::{DerivationFunction, Result as ApiResult};
use ecka_common::SecretVec;

use super::{counter_mode, max_output_length};
use crate::hash::HashAlgorithm;

/// Concatenation KDF: block `i` is `H(i ‖ Z ‖ OtherInfo)`, counting from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcatenationKdf {
    hash: HashAlgorithm,
}

impl ConcatenationKdf {
    /// Concatenation KDF over `hash`
    pub const fn new(hash: HashAlgorithm) -> Self {
        Self { hash }
    }
}

impl DerivationFunction for ConcatenationKdf {
    type Output = SecretVec;

    fn name(&self) -> String {
        format!("ConcatKDF({})", self.hash.name())
    }

    fn max_output_length(&self) -> usize {
        max_output_length(self.hash)
    }

    fn derive(
        &self,
        secret: &[u8],
        other_info: Option<&[u8]>,
        length: usize,
    ) -> ApiResult<SecretVec> {
        let info = other_info.unwrap_or_default();
        let hash = self.hash;
        let out = counter_mode(hash, length, "ConcatKDF output", |counter, block| {
            hash.digest_into(&[&counter[..], secret, info], block)
        })?;
        Ok(out)
    }
}
