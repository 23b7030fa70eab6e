//! ECMQV (SEC 1 section 3.4, ANSI X9.63)

use ecka_algorithms::DomainParameters;
use ecka_api::error::validate;
use ecka_api::{BasicAgreement, Error, Result};
use ecka_common::EcPoint;
use num_bigint::BigUint;
use num_traits::One;

use super::SharedSecret;
use crate::keys::{MqvPrivateKey, MqvPublicKey};

const SCHEME: &str = "ECMQV";

/// ECMQV over a local and a remote static/ephemeral bundle
#[derive(Clone, Copy, Debug, Default)]
pub struct EcmqvBasicAgreement;

/// Associate value `(x mod 2^w) + 2^w` of a point
fn associate(point: &EcPoint, w: u64) -> Result<BigUint> {
    let x = point
        .x()
        .ok_or_else(|| Error::invalid_key(SCHEME, "ephemeral point at infinity"))?;
    let bound = BigUint::one() << w;
    Ok((x % &bound) + bound)
}

impl BasicAgreement for EcmqvBasicAgreement {
    type PrivateKey = MqvPrivateKey;
    type PublicKey = MqvPublicKey;
    type Secret = SharedSecret;

    fn algorithm_name(&self) -> &'static str {
        SCHEME
    }

    fn calculate_agreement(
        &self,
        private: &MqvPrivateKey,
        public: &MqvPublicKey,
    ) -> Result<SharedSecret> {
        let domain = private.static_key().domain();
        let others = [
            private.ephemeral_key().domain(),
            public.static_key().domain(),
            public.ephemeral_key().domain(),
        ];
        let local_public = private.ephemeral_public().map(|key| key.domain());
        for other in others.into_iter().chain(local_public) {
            validate::same_domain(
                DomainParameters::same_domain(domain, other),
                SCHEME,
                "MQV keys use different domain parameters",
            )?;
        }

        let n = domain.order();
        // w = ceil(bitlength(n) / 2)
        let w = (n.bits() + 1) / 2;

        let local_ephemeral = match private.ephemeral_public() {
            Some(key) => key.point().clone(),
            None => domain.multiply_generator(&private.ephemeral_key().scalar())?,
        };

        let t = associate(&local_ephemeral, w)?;
        let z = (private.ephemeral_key().scalar() + t * private.static_key().scalar()) % n;

        let remote_ephemeral = public.ephemeral_key().point();
        let t_remote = associate(remote_ephemeral, w)?;
        let weighted = domain.scalar_multiply(public.static_key().point(), &t_remote)?;
        let combined = domain.point_add(remote_ephemeral, &weighted)?;

        let hz = domain.cofactor() * z;
        let point = domain.scalar_multiply(&combined, &hz)?;
        SharedSecret::from_point(domain, &point, SCHEME)
    }
}
