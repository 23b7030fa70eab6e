//! Key sizes for algorithms a derived secret can be requested for

/// DES key size in bits (parity bits included)
pub const DES_KEY_BITS: usize = 64;

/// Triple-DES key size in bits
pub const DESEDE_KEY_BITS: usize = 192;

/// Blowfish key size in bits
pub const BLOWFISH_KEY_BITS: usize = 128;

/// AES key size in bits when no variant is named
pub const AES_KEY_BITS: usize = 256;

/// AES-128 key size in bits
pub const AES128_KEY_BITS: usize = 128;

/// AES-192 key size in bits
pub const AES192_KEY_BITS: usize = 192;

/// AES-256 key size in bits
pub const AES256_KEY_BITS: usize = 256;

/// Camellia key size in bits
pub const CAMELLIA_KEY_BITS: usize = 256;

/// SEED key size in bits
pub const SEED_KEY_BITS: usize = 128;

/// Algorithm names (upper case) and their key sizes in bits
pub const KEY_SIZES: &[(&str, usize)] = &[
    ("DES", DES_KEY_BITS),
    ("DESEDE", DESEDE_KEY_BITS),
    ("BLOWFISH", BLOWFISH_KEY_BITS),
    ("AES", AES_KEY_BITS),
    ("AES128", AES128_KEY_BITS),
    ("AES192", AES192_KEY_BITS),
    ("AES256", AES256_KEY_BITS),
    ("CAMELLIA", CAMELLIA_KEY_BITS),
    ("SEED", SEED_KEY_BITS),
    ("HMACSHA1", 160),
    ("HMACSHA224", 224),
    ("HMACSHA256", 256),
    ("HMACSHA384", 384),
    ("HMACSHA512", 512),
];

/// Key size in bits for `algorithm`, matched case-insensitively
pub fn key_size_bits(algorithm: &str) -> Option<usize> {
    KEY_SIZES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(algorithm))
        .map(|&(_, bits)| bits)
}
