use std::fmt;

use zeroize::Zeroizing;

use super::error::{KeyError, KeyResult};
use super::keypair::Curve;
use super::path::Junction;
use super::{ed25519, secp256k1, sr25519};

/// 32 bytes of key material, wiped on drop.
pub type Seed = Zeroizing<[u8; 32]>;

/// Well-known Substrate development phrase.
pub const DEV_PHRASE: &str =
    "bottom drive obey lake curtain smoke basket hold race lonely fit walk";

/// Mini-secret of [`DEV_PHRASE`]; root of every development account.
pub const DEV_SEED: [u8; 32] = [
    0xfa, 0xc7, 0x95, 0x9d, 0xbf, 0xe7, 0x2f, 0x05, 0x2e, 0x5a, 0x0c, 0x3c, 0x8d, 0x65, 0x30, 0xf2,
    0x02, 0xb0, 0x2f, 0xd8, 0xf9, 0xf5, 0xca, 0x35, 0x80, 0xec, 0x8d, 0xeb, 0x77, 0x97, 0x47, 0x9e,
];

/// Canonical development account names.
pub const DEV_ACCOUNTS: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Dave", "Eve", "Ferdie", "One", "Two",
];

/// Where the root seed of a derivation comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The development seed itself.
    Dev,
    /// A raw 32-byte seed given as `0x`-prefixed hex.
    Raw(Seed),
    /// A named account: one hard junction off the development seed.
    DevAccount(String),
}

impl fmt::Debug for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Dev => f.write_str("Dev"),
            SeedSource::Raw(_) => f.write_str("Raw(..)"),
            SeedSource::DevAccount(name) => f.debug_tuple("DevAccount").field(name).finish(),
        }
    }
}

impl SeedSource {
    /// Resolve the base name of a derivation path.
    pub fn resolve(base: Option<&str>) -> KeyResult<Self> {
        let Some(name) = base else {
            return Ok(SeedSource::Dev);
        };

        if name == DEV_PHRASE {
            return Ok(SeedSource::Dev);
        }

        if let Some(hex_seed) = name.strip_prefix("0x") {
            let bytes = Zeroizing::new(hex::decode(hex_seed).map_err(|e| {
                KeyError::UnknownSeedSource(format!("invalid hex seed: {}", e))
            })?);
            let seed: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
                KeyError::UnknownSeedSource(format!(
                    "hex seed must be 32 bytes, got {}",
                    bytes.len()
                ))
            })?;
            return Ok(SeedSource::Raw(Zeroizing::new(seed)));
        }

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            // don't echo the input, it may be a real phrase
            return Err(KeyError::UnknownSeedSource(
                "only the development phrase is accepted as a phrase seed".to_string(),
            ));
        }

        Ok(SeedSource::DevAccount(name.to_string()))
    }
}

/// Produce the 32-byte seed `curve` starts its derivation from.
pub fn generate_seed(curve: Curve, source: &SeedSource) -> KeyResult<Seed> {
    match source {
        SeedSource::Dev => Ok(Zeroizing::new(DEV_SEED)),
        SeedSource::Raw(seed) => Ok(seed.clone()),
        SeedSource::DevAccount(name) => {
            let junction = Junction::hard(name);
            let cc = junction.chain_code();
            match curve {
                Curve::Ed25519 => Ok(ed25519::hard_derive_seed(&DEV_SEED, cc)),
                Curve::Secp256k1 => Ok(secp256k1::hard_derive_seed(&DEV_SEED, cc)),
                Curve::Sr25519 => sr25519::hard_derive_seed(&DEV_SEED, cc),
            }
        }
    }
}
