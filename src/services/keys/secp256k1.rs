// secp256k1 (ECDSA) keys for Substrate-style development accounts.
//
// Single level: the seed is read as a big-endian scalar. Candidates outside
// [1, n) are re-hashed with BLAKE2b-256 until one fits.

use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::Zeroizing;

use super::error::{KeyError, KeyResult};
use super::hashing::{blake2_256, hdkd};
use super::keypair::Curve;
use super::path::Junction;
use super::seed::Seed;

const HDKD_TAG: &str = "Secp256k1HDKD";
const MAX_REHASHES: usize = 8;

/// Length of a compressed public key: parity byte + X coordinate.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    pub fn derive(seed: &Seed, junctions: &[Junction]) -> KeyResult<(SecretKey, PublicKey)> {
        if !junctions.is_empty() {
            return Err(KeyError::UnsupportedJunctionForCurve {
                curve: Curve::Secp256k1,
                junctions: junctions.len(),
            });
        }

        let secret = secret_scalar(seed)?;
        let secp = Secp256k1::signing_only();
        let public = PublicKey::from_secret_key(&secp, &secret);
        Ok((secret, public))
    }
}

/// `blake2b-256(SCALE("Secp256k1HDKD") || seed || chain_code)`
pub fn hard_derive_seed(seed: &[u8; 32], chain_code: &[u8; 32]) -> Seed {
    Zeroizing::new(hdkd(HDKD_TAG, seed, chain_code))
}

/// `0x02`/`0x03` by Y parity, then the big-endian X coordinate.
pub fn compress(public: &PublicKey) -> [u8; COMPRESSED_PUBLIC_KEY_LEN] {
    public.serialize()
}

fn secret_scalar(seed: &[u8; 32]) -> KeyResult<SecretKey> {
    let mut candidate = Zeroizing::new(*seed);

    for _ in 0..=MAX_REHASHES {
        if candidate.iter().all(|b| *b == 0) {
            return Err(KeyError::InvalidScalar("seed reduces to zero".to_string()));
        }

        match SecretKey::from_slice(&candidate[..]) {
            Ok(secret) => return Ok(secret),
            Err(_) => {
                tracing::debug!("secp256k1 scalar candidate out of range, re-hashing");
                *candidate = blake2_256(&[&candidate[..]]);
            }
        }
    }

    Err(KeyError::InvalidScalar(format!(
        "no scalar below the curve order after {} re-hashes",
        MAX_REHASHES
    )))
}
