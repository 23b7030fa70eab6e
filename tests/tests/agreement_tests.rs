//! End-to-end key agreement tests across curves and configurations

use ecka_agreement::{
    AgreementConfiguration, AgreementScheme, KeyAgreementSession, MqvParameterSpec, SessionState,
    UserKeyingMaterialSpec,
};
use ecka_algorithms::{DomainParameters, NamedCurve};
use ecka_api::{Error, KeyAgreement};
use ecka_tests::{domain, exchange, mqv_exchange, run_session, test_rng, MqvParty, Party};

/// RFC 5903 section 8.1: 256-bit random ECP group
mod rfc5903 {
    pub const I: &str = "c88f01f510d9ac3f70a292daa2316de544e9aab8afe84049c62a9c57862d1433";
    pub const GIX: &str = "dad0b65394221cf9b051e1feca5787d098dfe637fc90b9ef945d0c3772581180";
    pub const GIY: &str = "5271a0461cdb8252d61f1c456fa3e59ab1f45b33accf5f58389e0577b8990bb3";
    pub const R: &str = "c6ef9c5d78ae012a011164acb397ce2088685d8f06bf9be0b283ab46476bee53";
    pub const GRX: &str = "d12dfb5289c8d4f81208b70270398c342296970a0bccb74c736fc7554494bf63";
    pub const GRY: &str = "56fbf3ca366cc23e8157854c13c58d6aac23f046ada30f8353e74f33039872ab";
    pub const GIRX: &str = "d6840f6b42f6edafd13116e0e12565202fef8e9ece7dce03812464d04b9442de";
}

#[test]
fn test_rfc5903_p256_scenario() {
    let p256 = domain(NamedCurve::P256);
    let i = Party::from_hex(&p256, rfc5903::I);
    let r = Party::from_hex(&p256, rfc5903::R);

    let gi = i.public.to_sec1().unwrap();
    assert_eq!(hex::encode(&gi[1..33]), rfc5903::GIX);
    assert_eq!(hex::encode(&gi[33..]), rfc5903::GIY);
    let gr = r.public.to_sec1().unwrap();
    assert_eq!(hex::encode(&gr[1..33]), rfc5903::GRX);
    assert_eq!(hex::encode(&gr[33..]), rfc5903::GRY);

    let config = AgreementConfiguration::by_name("ECDH").unwrap();
    let (a, b) = exchange(config, &i, &r, 0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
    assert_eq!(hex::encode(&a), rfc5903::GIRX);
}

#[test]
fn test_symmetry_on_every_curve_and_scheme() {
    let mut rng = test_rng(0x5eed);
    for curve in NamedCurve::ALL {
        let domain = domain(curve);
        let flen = domain.field_element_byte_length();

        let a = Party::generate(&domain, &mut rng);
        let b = Party::generate(&domain, &mut rng);
        for name in ["ECDH", "ECDHC"] {
            let config = AgreementConfiguration::by_name(name).unwrap();
            let (left, right) = exchange(config, &a, &b, 0).unwrap();
            assert_eq!(left, right, "{name} on {curve}");
            assert_eq!(left.len(), flen, "{name} on {curve}");
        }

        let a = MqvParty::generate(&domain, &mut rng);
        let b = MqvParty::generate(&domain, &mut rng);
        let config = AgreementConfiguration::by_name("ECMQV").unwrap();
        let (left, right) = mqv_exchange(config, &a, &b, 0).unwrap();
        assert_eq!(left, right, "ECMQV on {curve}");
        assert_eq!(left.len(), flen, "ECMQV on {curve}");
    }
}

#[test]
fn test_every_configuration_agrees() {
    let mut rng = test_rng(27);
    let domain = domain(NamedCurve::P256);
    let plain = (Party::generate(&domain, &mut rng), Party::generate(&domain, &mut rng));
    let mqv = (MqvParty::generate(&domain, &mut rng), MqvParty::generate(&domain, &mut rng));

    for config in AgreementConfiguration::all() {
        let (left, right) = match config.scheme() {
            AgreementScheme::Mqv => mqv_exchange(*config, &mqv.0, &mqv.1, 40),
            _ => exchange(*config, &plain.0, &plain.1, 40),
        }
        .unwrap();
        assert_eq!(left, right, "{config}");
        let expected = if config.kdf().is_some() { 40 } else { 32 };
        assert_eq!(left.len(), expected, "{config}");
    }
}

#[test]
fn test_cofactor_divergence() {
    let mut rng = test_rng(4);
    let plain = AgreementConfiguration::by_name("ECDH").unwrap();
    let cofactor = AgreementConfiguration::by_name("ECDHC").unwrap();

    let s112 = domain(NamedCurve::Secp112r2);
    let a = Party::generate(&s112, &mut rng);
    let b = Party::generate(&s112, &mut rng);
    assert_ne!(
        exchange(plain, &a, &b, 0).unwrap().0,
        exchange(cofactor, &a, &b, 0).unwrap().0
    );

    let p256 = domain(NamedCurve::P256);
    let a = Party::generate(&p256, &mut rng);
    let b = Party::generate(&p256, &mut rng);
    assert_eq!(
        exchange(plain, &a, &b, 0).unwrap().0,
        exchange(cofactor, &a, &b, 0).unwrap().0
    );
}

#[test]
fn test_kdf_binds_user_keying_material() {
    let mut rng = test_rng(9);
    let domain = domain(NamedCurve::P384);
    let a = Party::generate(&domain, &mut rng);
    let b = Party::generate(&domain, &mut rng);

    let derive = |ukm: &[u8]| {
        let mut session = KeyAgreementSession::for_algorithm("ECDHwithSHA384KDF").unwrap();
        session
            .init(
                a.private.clone().into(),
                Some(UserKeyingMaterialSpec::new(ukm).into()),
            )
            .unwrap();
        session.process_remote_key(b.public.clone().into(), true).unwrap();
        session.derive_secret(64).unwrap()
    };

    assert_eq!(derive(&b"one"[..]), derive(&b"one"[..]));
    assert_ne!(derive(&b"one"[..]), derive(&b"two"[..]));
}

#[test]
fn test_kdf_framings_differ() {
    let mut rng = test_rng(11);
    let domain = domain(NamedCurve::Secp256k1);
    let a = Party::generate(&domain, &mut rng);
    let b = Party::generate(&domain, &mut rng);

    // Same hash, same cofactor rule, different framing
    let kdf2 = AgreementConfiguration::by_name("ECCDHwithSHA256KDF").unwrap();
    let concat = AgreementConfiguration::by_name("ECDHwithSHA256CKDF").unwrap();
    assert_ne!(
        exchange(kdf2, &a, &b, 32).unwrap().0,
        exchange(concat, &a, &b, 32).unwrap().0
    );
}

#[test]
fn test_mismatched_curves_rejected() {
    let mut rng = test_rng(12);
    let p256 = domain(NamedCurve::P256);
    let p384 = domain(NamedCurve::P384);
    let a = Party::generate(&p256, &mut rng);
    let b = Party::generate(&p384, &mut rng);

    let config = AgreementConfiguration::by_name("ECDH").unwrap();
    assert!(matches!(
        run_session(config, a.private.into(), b.public.into(), 0),
        Err(Error::KeyMismatch { .. })
    ));

    let a = MqvParty::generate(&p256, &mut rng);
    let b = MqvParty::generate(&p384, &mut rng);
    let config = AgreementConfiguration::by_name("ECMQVwithSHA256KDF").unwrap();
    assert!(matches!(
        run_session(config, a.private().into(), b.public().into(), 16),
        Err(Error::KeyMismatch { .. })
    ));
}

#[test]
fn test_reference_backend_interoperates() {
    let mut rng = test_rng(13);
    let fast = domain(NamedCurve::P256);
    let slow = DomainParameters::reference(NamedCurve::P256).unwrap();
    let a = Party::generate(&fast, &mut rng);
    let b = Party::generate(&slow, &mut rng);

    let config = AgreementConfiguration::by_name("ECDHwithSHA1KDF").unwrap();
    let (left, right) = exchange(config, &a, &b, 20).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_mqv_with_parameter_spec() {
    let mut rng = test_rng(14);
    let domain = domain(NamedCurve::Secp112r2);
    let a = MqvParty::generate(&domain, &mut rng);
    let b = MqvParty::generate(&domain, &mut rng);

    let spec = MqvParameterSpec::new(a.ephemeral_pair.private.clone())
        .with_other_party_ephemeral(b.ephemeral_pair.public.clone())
        .with_user_keying_material(&b"session 1"[..]);
    let mut left = KeyAgreementSession::for_algorithm("ECMQVwithSHA224CKDF").unwrap();
    left.init(a.static_pair.private.clone().into(), Some(spec.into()))
        .unwrap();
    left.process_remote_key(b.static_pair.public.clone().into(), true)
        .unwrap();

    let mut right = KeyAgreementSession::for_algorithm("ECMQVwithSHA224CKDF").unwrap();
    right
        .init(
            b.private().into(),
            Some(UserKeyingMaterialSpec::new(&b"session 1"[..]).into()),
        )
        .unwrap();
    right.process_remote_key(a.public().into(), true).unwrap();

    assert_eq!(left.derive_secret(28).unwrap(), right.derive_secret(28).unwrap());
    assert_eq!(left.state(), SessionState::SecretComputed);
}

#[test]
fn test_session_is_single_use() {
    let mut rng = test_rng(15);
    let domain = domain(NamedCurve::P256);
    let a = Party::generate(&domain, &mut rng);
    let b = Party::generate(&domain, &mut rng);

    let mut session = KeyAgreementSession::for_algorithm("ECDH").unwrap();
    session.init(a.private.clone().into(), None).unwrap();
    session.process_remote_key(b.public.clone().into(), true).unwrap();
    session.derive_secret(0).unwrap();

    assert!(matches!(
        session.init(a.private.into(), None),
        Err(Error::IllegalState { operation: "init", .. })
    ));
    assert!(matches!(
        session.process_remote_key(b.public.into(), true),
        Err(Error::IllegalState {
            operation: "process_remote_key",
            ..
        })
    ));
}
