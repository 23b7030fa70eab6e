//! Endianness utility functions

/// Convert a u32 from native byte order to big-endian bytes
///
/// Used for the 32-bit block counter of the counter-mode KDFs.
#[inline(always)]
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Slice of a big-endian magnitude with its leading zero bytes removed
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}
