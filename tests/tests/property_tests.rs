//! Property-based tests for the encoder, the KDFs and the agreement rules

use ecka_agreement::AgreementConfiguration;
use ecka_algorithms::hash::HashAlgorithm;
use ecka_algorithms::kdf::{KdfKind, KeyDerivation};
use ecka_algorithms::{integer_to_bytes, NamedCurve};
use ecka_api::DerivationFunction;
use ecka_tests::{domain, exchange, test_rng, Party};
use num_bigint::BigUint;
use proptest::prelude::*;

fn hash_strategy() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha224),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha384),
        Just(HashAlgorithm::Sha512),
    ]
}

fn kind_strategy() -> impl Strategy<Value = KdfKind> {
    prop_oneof![Just(KdfKind::Kdf2), Just(KdfKind::Concatenation)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every value below 2^(8·len) encodes to exactly len bytes and decodes back
    #[test]
    fn fixed_length_encoding_keeps_width(
        value in prop::collection::vec(any::<u8>(), 0..=32),
        extra in 0usize..=16
    ) {
        let len = value.len() + extra;
        let n = BigUint::from_bytes_be(&value);
        let encoded = integer_to_bytes(&n, len).unwrap();
        prop_assert_eq!(encoded.len(), len);
        prop_assert_eq!(BigUint::from_bytes_be(&encoded), n);
        prop_assert!(encoded[..extra].iter().all(|&b| b == 0));
    }
}

proptest! {
    #[test]
    fn kdf_output_has_requested_length(
        kind in kind_strategy(),
        hash in hash_strategy(),
        secret in prop::collection::vec(any::<u8>(), 1..=66),
        info in prop::option::of(prop::collection::vec(any::<u8>(), 0..=32)),
        length in 0usize..=300
    ) {
        let kdf = KeyDerivation::new(kind, hash);
        let out = kdf.derive(&secret, info.as_deref(), length).unwrap();
        prop_assert_eq!(out.len(), length);

        let again = kdf.derive(&secret, info.as_deref(), length).unwrap();
        prop_assert_eq!(out, again);
    }

    #[test]
    fn kdf_output_is_prefix_stable(
        kind in kind_strategy(),
        hash in hash_strategy(),
        secret in prop::collection::vec(any::<u8>(), 1..=48),
        short in 0usize..=100,
        grow in 0usize..=100
    ) {
        let kdf = KeyDerivation::new(kind, hash);
        let a = kdf.derive(&secret, None, short).unwrap();
        let b = kdf.derive(&secret, None, short + grow).unwrap();
        prop_assert_eq!(a.as_slice(), &b[..short]);
    }

    #[test]
    fn kdf_separates_shared_info(
        hash in hash_strategy(),
        secret in prop::collection::vec(any::<u8>(), 1..=48),
        info_a in prop::collection::vec(any::<u8>(), 0..=16),
        info_b in prop::collection::vec(any::<u8>(), 0..=16)
    ) {
        prop_assume!(info_a != info_b);
        let kdf = KeyDerivation::new(KdfKind::Kdf2, hash);
        let a = kdf.derive(&secret, Some(info_a.as_slice()), 32).unwrap();
        let b = kdf.derive(&secret, Some(info_b.as_slice()), 32).unwrap();
        prop_assert_ne!(a, b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Both parties always agree, whichever seed generated their keys
    #[test]
    fn plain_agreement_is_symmetric(seed in any::<u64>(), cofactor in any::<bool>()) {
        let name = if cofactor { "ECDHC" } else { "ECDH" };
        let config = AgreementConfiguration::by_name(name).unwrap();
        let mut rng = test_rng(seed);
        for curve in [NamedCurve::P256, NamedCurve::Secp112r2] {
            let domain = domain(curve);
            let a = Party::generate(&domain, &mut rng);
            let b = Party::generate(&domain, &mut rng);
            let (left, right) = exchange(config, &a, &b, 0).unwrap();
            prop_assert_eq!(left.len(), domain.field_element_byte_length());
            prop_assert_eq!(left, right);
        }
    }
}
