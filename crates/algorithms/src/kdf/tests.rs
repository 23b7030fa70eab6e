use super::*;
use ecka_api::Error as ApiError;

/// ANSI X9.63 KDF test vector (NIST CAVS), SHA-256, no SharedInfo
#[test]
fn test_kdf2_sha256_x963_vector() {
    let z = hex::decode("96c05619d56c328ab95fe84b18264b08725b85e33fd34f08").unwrap();
    let expected = hex::decode("443024c3dae66b95e6f5670601558f71").unwrap();

    let okm = Kdf2::new(HashAlgorithm::Sha256).derive(&z, None, 16).unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());
}

/// ANSI X9.63 KDF test vector (NIST CAVS), SHA-1, no SharedInfo, several blocks
#[test]
fn test_kdf2_sha1_multi_block() {
    let z = hex::decode("1c7d7b5f0597b03d06a018466ed1a93e30ed4b04dc64ccdd").unwrap();
    let expected = hex::decode(
        "bf71dffd8f4d99223936beb46fee8ccc60439b7e52f12b8933fe82ef964ba77543399661a19feeab75c979e87a3a3e15520d51ddc7be7e76eeeb68851a26c33c1249a37b0b2bcd8eb237e8dd061bbe0cddf0b577e3d12d9d6d445fcc1f85bd336a04eed0981ce5b867023dda09bd775fe02484e3d490c0c0a5073249142329c1",
    )
    .unwrap();

    let okm = Kdf2::new(HashAlgorithm::Sha1).derive(&z, None, 128).unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());

    // The first 16 bytes are the published single-block answer
    assert_eq!(hex::encode(&okm[..16]), "bf71dffd8f4d99223936beb46fee8ccc");
}

/// KDF2 with SharedInfo over SHA-512, output not a multiple of the block size
#[test]
fn test_kdf2_sha512_with_shared_info() {
    let z = hex::decode("96c05619d56c328ab95fe84b18264b08725b85e33fd34f08").unwrap();
    let info = hex::decode("75eef81aa3041e33b80971203d2c0c52").unwrap();
    let expected = hex::decode(
        "4a548386d9c0c14ba2af9b5bb7f9ac5ab630b93d13f29f7553f8210b7d0559e65f1b70599ffce67bb160b6d58c518efb7be1b42abe749a4abac4373e85ff24d71bf605ebb5c14cedbb60456d537e6cc6430ef2457f9b87802ec7ea20a20ab3515d853da6",
    )
    .unwrap();

    let okm = Kdf2::new(HashAlgorithm::Sha512).derive(&z, Some(info.as_slice()), 100).unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());
}

/// NIST SP 800-56A concatenation KDF (CAVS), SHA-256 with OtherInfo
#[test]
fn test_concat_sha256_vector() {
    let z = hex::decode("52169af5c485dcc2321eb8d26d5efa21fb9b93c98e38412ee2484cf14f0d0d23").unwrap();
    let other_info = hex::decode(
        "a1b2c3d4e53728157e634612c12d6d5223e204aeea4341565369647bd184bcd246f72971f292badaa2fe4124612cba",
    )
    .unwrap();
    let expected = hex::decode("1c3bc9e7c4547c5191c0d478cccaed55").unwrap();

    let okm = ConcatenationKdf::new(HashAlgorithm::Sha256)
        .derive(&z, Some(other_info.as_slice()), 16)
        .unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());
}

#[test]
fn test_concat_sha1_multi_block() {
    let z = hex::decode("52169af5c485dcc2321eb8d26d5efa21fb9b93c98e38412ee2484cf14f0d0d23").unwrap();
    let expected = hex::decode(
        "50fb5f44c47d62bff02b2d4a10031ad6e131d6c5e3976a3745339eb44ee7bc42e4f6a4c6464be9b7d8d35bb83867da78fab7",
    )
    .unwrap();

    let okm = ConcatenationKdf::new(HashAlgorithm::Sha1).derive(&z, None, 50).unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());
}

#[test]
fn test_framings_differ() {
    let z = [0x42u8; 32];
    for hash in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
        let a = KeyDerivation::new(KdfKind::Kdf2, hash).derive(&z, None, 40).unwrap();
        let b = KeyDerivation::new(KdfKind::Concatenation, hash).derive(&z, None, 40).unwrap();
        assert_ne!(a, b, "{hash}");
    }
}

#[test]
fn test_dispatch_matches_direct_use() {
    let z = [7u8; 20];
    let info = b"ukm".to_vec();
    let via_enum = KeyDerivation::new(KdfKind::Kdf2, HashAlgorithm::Sha224)
        .derive(&z, Some(info.as_slice()), 33)
        .unwrap();
    let direct = Kdf2::new(HashAlgorithm::Sha224).derive(&z, Some(info.as_slice()), 33).unwrap();
    assert_eq!(via_enum, direct);

    let via_enum = KeyDerivation::new(KdfKind::Concatenation, HashAlgorithm::Sha384)
        .derive(&z, Some(info.as_slice()), 33)
        .unwrap();
    let direct = ConcatenationKdf::new(HashAlgorithm::Sha384)
        .derive(&z, Some(info.as_slice()), 33)
        .unwrap();
    assert_eq!(via_enum, direct);
}

#[test]
fn test_shorter_output_is_prefix() {
    let kdf = KeyDerivation::new(KdfKind::Concatenation, HashAlgorithm::Sha256);
    let long = kdf.derive(b"secret", Some(&b"info"[..]), 100).unwrap();
    let short = kdf.derive(b"secret", Some(&b"info"[..]), 33).unwrap();
    assert_eq!(&long[..33], short.as_slice());
}

#[test]
fn test_shared_info_changes_output() {
    let kdf = KeyDerivation::new(KdfKind::Kdf2, HashAlgorithm::Sha256);
    let a = kdf.derive(b"secret", Some(&b"party A"[..]), 32).unwrap();
    let b = kdf.derive(b"secret", Some(&b"party B"[..]), 32).unwrap();
    let none = kdf.derive(b"secret", None, 32).unwrap();
    let empty = kdf.derive(b"secret", Some(&[][..]), 32).unwrap();
    assert_ne!(a, b);
    assert_eq!(none, empty);
}

#[test]
fn test_zero_length_output() {
    let kdf = KeyDerivation::new(KdfKind::Kdf2, HashAlgorithm::Sha1);
    assert!(kdf.derive(b"secret", None, 0).unwrap().is_empty());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_output_limit() {
    let kdf = KeyDerivation::new(KdfKind::Kdf2, HashAlgorithm::Sha1);
    let max = kdf.max_output_length();
    assert_eq!(max, (u32::MAX as usize).saturating_mul(20));
    match kdf.derive(b"secret", None, max.saturating_add(1)) {
        Err(ApiError::InvalidLength { expected, .. }) => assert_eq!(expected, max),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_names() {
    let kdf = KeyDerivation::new(KdfKind::Concatenation, HashAlgorithm::Sha384);
    assert_eq!(kdf.name(), "ConcatKDF(SHA-384)");
    assert_eq!(Kdf2::new(HashAlgorithm::Sha1).name(), "KDF2(SHA-1)");
}
