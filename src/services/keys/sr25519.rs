// Sr25519 (Schnorrkel) hierarchical deterministic derivation.
//
// Root:  mini secret -> Ed25519-mode expansion -> secret key + nonce
// Hard:  secret -> hard_derive_mini_secret_key(cc) -> expand again
// Soft:  secret -> derived_key_simple(cc), reproducible from the public key
//
// Junctions are applied left to right; the output of one is the input of the
// next.

use schnorrkel::derive::{ChainCode, Derivation};
use schnorrkel::{Keypair, MiniSecretKey, PublicKey};
use zeroize::Zeroizing;

use super::error::{KeyError, KeyResult};
use super::path::Junction;
use super::seed::Seed;

pub struct Sr25519Deriver;

impl Sr25519Deriver {
    /// Expand `seed` and follow every junction in order.
    pub fn derive(seed: &Seed, junctions: &[Junction]) -> KeyResult<Keypair> {
        let mini = mini_secret(seed)?;
        let mut secret = mini.expand(MiniSecretKey::ED25519_MODE);

        for junction in junctions {
            secret = match junction {
                Junction::Hard(cc) => {
                    let (child, _) = secret.hard_derive_mini_secret_key(Some(ChainCode(*cc)), b"");
                    child.expand(MiniSecretKey::ED25519_MODE)
                }
                Junction::Soft(cc) => secret.derived_key_simple(ChainCode(*cc), b"").0,
            };
        }

        Ok(secret.to_keypair())
    }
}

/// Single hard step from a mini secret, returning the child mini secret.
pub fn hard_derive_seed(seed: &[u8; 32], chain_code: &[u8; 32]) -> KeyResult<Seed> {
    let secret = mini_secret(seed)?.expand(MiniSecretKey::ED25519_MODE);
    let (child, _) = secret.hard_derive_mini_secret_key(Some(ChainCode(*chain_code)), b"");
    Ok(Zeroizing::new(child.to_bytes()))
}

/// Follow soft junctions from a public key alone.
pub fn derive_public_soft(public: &[u8; 32], junctions: &[Junction]) -> KeyResult<[u8; 32]> {
    let mut key = PublicKey::from_bytes(public)
        .map_err(|e| KeyError::DerivationFailed(format!("invalid sr25519 public key: {}", e)))?;

    for junction in junctions {
        key = match junction {
            Junction::Soft(cc) => key.derived_key_simple(ChainCode(*cc), b"").0,
            Junction::Hard(_) => {
                return Err(KeyError::DerivationFailed(
                    "hard junctions require the secret key".to_string(),
                ))
            }
        };
    }

    Ok(key.to_bytes())
}

fn mini_secret(seed: &[u8; 32]) -> KeyResult<MiniSecretKey> {
    MiniSecretKey::from_bytes(seed)
        .map_err(|e| KeyError::DerivationFailed(format!("invalid mini secret: {}", e)))
}
