//! Fixed-length encoding of field elements
//!
//! A shared secret is emitted as a big-endian byte string whose length is
//! fixed by the field size of its curve, never by the numeric value of the
//! secret. A value with leading zero bits is left-padded with zero bytes.

use ecka_common::SecretVec;
use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Encode `value` as exactly `length` big-endian bytes
///
/// Values wider than `length` bytes are rejected, not truncated.
pub fn integer_to_bytes(value: &BigUint, length: usize) -> Result<SecretVec> {
    let mut magnitude = value.to_bytes_be();
    // to_bytes_be gives [0] for zero
    let significant = if magnitude.iter().all(|&b| b == 0) {
        0
    } else {
        magnitude.len()
    };
    if let Err(e) = validate::max_length("fixed-length encoding", significant, length) {
        magnitude.zeroize();
        return Err(e);
    }

    let mut out = SecretVec::zeroed(length);
    let digits = &magnitude[magnitude.len() - significant..];
    out.as_mut_slice()[length - significant..].copy_from_slice(digits);
    magnitude.zeroize();
    Ok(out)
}

/// Number of bytes needed for a field element of `field_bits` bits
pub const fn field_byte_length(field_bits: usize) -> usize {
    (field_bits + 7) / 8
}
