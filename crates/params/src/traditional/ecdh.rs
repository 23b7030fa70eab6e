//! Constants for Elliptic Curve key agreement
//!
//! Domain parameters in the hex form published by SEC 2 and FIPS 186-4.

/// Hex form of a short Weierstrass curve definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveConstants {
    /// Curve identity
    pub name: &'static str,
    /// Field prime
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// NIST P-256 (secp256r1)
pub const P256: CurveConstants = CurveConstants {
    name: "P-256",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: 1,
};

/// NIST P-384 (secp384r1)
pub const P384: CurveConstants = CurveConstants {
    name: "P-384",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    h: 1,
};

/// secp256k1
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    h: 1,
};

/// secp112r2, a small curve with cofactor 4
pub const SECP112R2: CurveConstants = CurveConstants {
    name: "secp112r2",
    p: "db7c2abf62e35e668076bead208b",
    a: "6127c24c05f38a0aaaf65c0ef02c",
    b: "51def1815db5ed74fcc34c85d709",
    gx: "4ba30ab5e892b4e1649dd0928643",
    gy: "adcd46f5882e3747def36e956e97",
    n: "36df0aafd8b8d7597ca10520d04b",
    h: 4,
};

/// Size of the fixed-length shared secret encoding for P-256 in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of the fixed-length shared secret encoding for P-384 in bytes
pub const P384_FIELD_ELEMENT_SIZE: usize = 48;

/// Size of the fixed-length shared secret encoding for secp256k1 in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of the fixed-length shared secret encoding for secp112r2 in bytes
pub const SECP112R2_FIELD_ELEMENT_SIZE: usize = 14;
