//! Named agreement configurations
//!
//! A configuration fixes the agreement rule and, optionally, the derivation
//! function applied to the raw secret. The full set lives in the static
//! [`CONFIGURATIONS`] table; names are matched case-insensitively.

use core::fmt;
use core::str::FromStr;

use ecka_algorithms::hash::HashAlgorithm;
use ecka_algorithms::kdf::{KdfKind, KeyDerivation};
use ecka_api::{Error, Result};
use log::trace;

use crate::scheme::AgreementScheme;
use AgreementScheme::{Cofactor, Mqv, Plain};
use HashAlgorithm::{Sha1, Sha224, Sha256, Sha384, Sha512};
use KdfKind::{Concatenation as Concat, Kdf2};

/// Derivation function attached to a configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KdfSpec {
    /// Counter framing
    pub kind: KdfKind,
    /// Digest
    pub hash: HashAlgorithm,
}

impl KdfSpec {
    /// The runnable derivation function
    pub const fn derivation(self) -> KeyDerivation {
        KeyDerivation::new(self.kind, self.hash)
    }
}

/// An immutable (scheme, KDF) pairing looked up by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgreementConfiguration {
    name: &'static str,
    scheme: AgreementScheme,
    kdf: Option<KdfSpec>,
}

const fn entry(
    name: &'static str,
    scheme: AgreementScheme,
    kdf: Option<(KdfKind, HashAlgorithm)>,
) -> AgreementConfiguration {
    let kdf = match kdf {
        Some((kind, hash)) => Some(KdfSpec { kind, hash }),
        None => None,
    };
    AgreementConfiguration { name, scheme, kdf }
}

/// Every supported configuration
pub static CONFIGURATIONS: &[AgreementConfiguration] = &[
    entry("ECDH", Plain, None),
    entry("ECDHC", Cofactor, None),
    entry("ECMQV", Mqv, None),
    // X9.63 KDF2
    entry("ECDHwithSHA1KDF", Plain, Some((Kdf2, Sha1))),
    entry("ECDHwithSHA224KDF", Plain, Some((Kdf2, Sha224))),
    entry("ECDHwithSHA256KDF", Plain, Some((Kdf2, Sha256))),
    entry("ECDHwithSHA384KDF", Plain, Some((Kdf2, Sha384))),
    entry("ECDHwithSHA512KDF", Plain, Some((Kdf2, Sha512))),
    entry("ECCDHwithSHA1KDF", Cofactor, Some((Kdf2, Sha1))),
    entry("ECCDHwithSHA224KDF", Cofactor, Some((Kdf2, Sha224))),
    entry("ECCDHwithSHA256KDF", Cofactor, Some((Kdf2, Sha256))),
    entry("ECCDHwithSHA384KDF", Cofactor, Some((Kdf2, Sha384))),
    entry("ECCDHwithSHA512KDF", Cofactor, Some((Kdf2, Sha512))),
    entry("ECMQVwithSHA1KDF", Mqv, Some((Kdf2, Sha1))),
    entry("ECMQVwithSHA224KDF", Mqv, Some((Kdf2, Sha224))),
    entry("ECMQVwithSHA256KDF", Mqv, Some((Kdf2, Sha256))),
    entry("ECMQVwithSHA384KDF", Mqv, Some((Kdf2, Sha384))),
    entry("ECMQVwithSHA512KDF", Mqv, Some((Kdf2, Sha512))),
    // SP 800-56A concatenation KDF; the ECDH variants run cofactor DH
    entry("ECDHwithSHA1CKDF", Cofactor, Some((Concat, Sha1))),
    entry("ECDHwithSHA256CKDF", Cofactor, Some((Concat, Sha256))),
    entry("ECDHwithSHA384CKDF", Cofactor, Some((Concat, Sha384))),
    entry("ECDHwithSHA512CKDF", Cofactor, Some((Concat, Sha512))),
    entry("ECMQVwithSHA1CKDF", Mqv, Some((Concat, Sha1))),
    entry("ECMQVwithSHA224CKDF", Mqv, Some((Concat, Sha224))),
    entry("ECMQVwithSHA256CKDF", Mqv, Some((Concat, Sha256))),
    entry("ECMQVwithSHA384CKDF", Mqv, Some((Concat, Sha384))),
    entry("ECMQVwithSHA512CKDF", Mqv, Some((Concat, Sha512))),
];

impl AgreementConfiguration {
    /// Look a configuration up by name, ignoring ASCII case
    pub fn by_name(name: &str) -> Result<Self> {
        let found = CONFIGURATIONS
            .iter()
            .find(|config| config.name.eq_ignore_ascii_case(name))
            .copied();
        trace!("configuration lookup for {name}: {}", found.is_some());
        found.ok_or_else(|| Error::UnknownAlgorithm {
            name: name.to_string(),
        })
    }

    /// Every supported configuration
    pub fn all() -> &'static [AgreementConfiguration] {
        CONFIGURATIONS
    }

    /// Canonical name, e.g. `"ECMQVwithSHA256CKDF"`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Agreement rule
    pub const fn scheme(&self) -> AgreementScheme {
        self.scheme
    }

    /// Derivation function, if any
    pub const fn kdf(&self) -> Option<KdfSpec> {
        self.kdf
    }
}

impl FromStr for AgreementConfiguration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}

impl fmt::Display for AgreementConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
