// Ed25519 keys for Substrate-style development accounts.
//
// Single level only: the 32-byte seed is the signing key seed. Named accounts
// reach this module already hard-derived by the seed generator.

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use super::error::{KeyError, KeyResult};
use super::hashing::hdkd;
use super::keypair::Curve;
use super::path::Junction;
use super::seed::Seed;

const HDKD_TAG: &str = "Ed25519HDKD";

pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// Build the signing key for `seed`. Explicit junctions are rejected.
    pub fn derive(seed: &Seed, junctions: &[Junction]) -> KeyResult<SigningKey> {
        if !junctions.is_empty() {
            return Err(KeyError::UnsupportedJunctionForCurve {
                curve: Curve::Ed25519,
                junctions: junctions.len(),
            });
        }

        Ok(SigningKey::from_bytes(seed))
    }
}

/// `blake2b-256(SCALE("Ed25519HDKD") || seed || chain_code)`
pub fn hard_derive_seed(seed: &[u8; 32], chain_code: &[u8; 32]) -> Seed {
    Zeroizing::new(hdkd(HDKD_TAG, seed, chain_code))
}
