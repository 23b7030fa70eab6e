//! Plain and cofactor Diffie-Hellman

use ecka_algorithms::DomainParameters;
use ecka_api::error::validate;
use ecka_api::{BasicAgreement, Result};

use super::SharedSecret;
use crate::keys::{PrivateKey, PublicKey};

fn check_domains(private: &PrivateKey, public: &PublicKey, scheme: &'static str) -> Result<()> {
    validate::same_domain(
        DomainParameters::same_domain(private.domain(), public.domain()),
        scheme,
        "private and public keys use different domain parameters",
    )
}

/// ECDH: the shared secret is the x-coordinate of `d · Q`
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdhBasicAgreement;

impl BasicAgreement for EcdhBasicAgreement {
    type PrivateKey = PrivateKey;
    type PublicKey = PublicKey;
    type Secret = SharedSecret;

    fn algorithm_name(&self) -> &'static str {
        "ECDH"
    }

    fn calculate_agreement(&self, private: &PrivateKey, public: &PublicKey) -> Result<SharedSecret> {
        check_domains(private, public, "ECDH")?;
        let domain = private.domain();
        let point = domain.scalar_multiply(public.point(), &private.scalar())?;
        SharedSecret::from_point(domain, &point, "ECDH")
    }
}

/// Cofactor ECDH: the shared secret is the x-coordinate of `(h · d) · Q`
///
/// `h · d` reaches the arithmetic unreduced, so any small-subgroup component
/// of `Q` is cleared. On curves with `h = 1` this agrees with ECDH.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdhcBasicAgreement;

impl BasicAgreement for EcdhcBasicAgreement {
    type PrivateKey = PrivateKey;
    type PublicKey = PublicKey;
    type Secret = SharedSecret;

    fn algorithm_name(&self) -> &'static str {
        "ECDHC"
    }

    fn calculate_agreement(&self, private: &PrivateKey, public: &PublicKey) -> Result<SharedSecret> {
        check_domains(private, public, "ECDHC")?;
        let domain = private.domain();
        let hd = domain.cofactor() * private.scalar();
        let point = domain.scalar_multiply(public.point(), &hd)?;
        SharedSecret::from_point(domain, &point, "ECDHC")
    }
}
