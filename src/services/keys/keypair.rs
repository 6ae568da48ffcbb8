use std::fmt;
use std::str::FromStr;

use ::secp256k1::{PublicKey as EcdsaPublic, SecretKey as EcdsaSecret};
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};

use super::ed25519::Ed25519Deriver;
use super::error::KeyResult;
use super::path::DerivationPath;
use super::secp256k1::{compress, Secp256k1Deriver};
use super::seed::{generate_seed, SeedSource};
use super::sr25519::Sr25519Deriver;
use super::ss58::encode_ss58;

/// Supported signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Ed25519,
    #[serde(alias = "sr")]
    Sr25519,
    #[serde(alias = "ecdsa")]
    Secp256k1,
}

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::Ed25519, Curve::Sr25519, Curve::Secp256k1];

    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Ed25519 => "ed25519",
            Curve::Sr25519 => "sr25519",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    /// Size of this curve's encoded public key.
    pub fn public_key_len(&self) -> usize {
        match self {
            Curve::Ed25519 | Curve::Sr25519 => 32,
            Curve::Secp256k1 => 33,
        }
    }

    /// Resolve the seed named by `path` and follow its junctions.
    pub fn derive(&self, path: &DerivationPath) -> KeyResult<KeyPair> {
        let source = SeedSource::resolve(path.seed())?;
        let seed = generate_seed(*self, &source)?;
        let junctions = path.junctions();

        tracing::trace!(curve = %self, junctions = junctions.len(), "deriving key pair");

        let pair = match self {
            Curve::Ed25519 => KeyPair::Ed25519(Ed25519Deriver::derive(&seed, junctions)?),
            Curve::Sr25519 => KeyPair::Sr25519(Sr25519Deriver::derive(&seed, junctions)?),
            Curve::Secp256k1 => {
                let (secret, public) = Secp256k1Deriver::derive(&seed, junctions)?;
                KeyPair::Secp256k1 { secret, public }
            }
        };
        Ok(pair)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Curve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ed25519" => Ok(Curve::Ed25519),
            "sr25519" | "sr" => Ok(Curve::Sr25519),
            "secp256k1" | "ecdsa" => Ok(Curve::Secp256k1),
            other => Err(format!("Unsupported curve: {}", other)),
        }
    }
}

/// A derived key pair. Secret material is never printed.
pub enum KeyPair {
    Ed25519(SigningKey),
    Sr25519(schnorrkel::Keypair),
    Secp256k1 {
        secret: EcdsaSecret,
        public: EcdsaPublic,
    },
}

impl KeyPair {
    pub fn curve(&self) -> Curve {
        match self {
            KeyPair::Ed25519(_) => Curve::Ed25519,
            KeyPair::Sr25519(_) => Curve::Sr25519,
            KeyPair::Secp256k1 { .. } => Curve::Secp256k1,
        }
    }

    /// Encoded public key: 32 bytes, or 33 compressed bytes for secp256k1.
    pub fn public_key(&self) -> Vec<u8> {
        match self {
            KeyPair::Ed25519(signing) => signing.verifying_key().to_bytes().to_vec(),
            KeyPair::Sr25519(pair) => pair.public.to_bytes().to_vec(),
            KeyPair::Secp256k1 { public, .. } => compress(public).to_vec(),
        }
    }

    pub fn to_ss58(&self, prefix: u16) -> KeyResult<String> {
        encode_ss58(prefix, &self.public_key())
    }

    /// The Ed25519 signing key, if this is an Ed25519 pair.
    pub fn as_ed25519(&self) -> Option<&SigningKey> {
        match self {
            KeyPair::Ed25519(signing) => Some(signing),
            _ => None,
        }
    }

    /// The schnorrkel key pair, if this is an Sr25519 pair.
    pub fn as_sr25519(&self) -> Option<&schnorrkel::Keypair> {
        match self {
            KeyPair::Sr25519(pair) => Some(pair),
            _ => None,
        }
    }

    /// The ECDSA secret key, if this is a secp256k1 pair.
    pub fn as_secp256k1(&self) -> Option<&EcdsaSecret> {
        match self {
            KeyPair::Secp256k1 { secret, .. } => Some(secret),
            _ => None,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve())
            .field("public", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

/// Derive any curve from a textual path.
pub fn derive(curve: Curve, path: &str) -> KeyResult<KeyPair> {
    curve.derive(&path.parse()?)
}

/// Ed25519 key for a single name, e.g. `"Alice"`.
pub fn derive_ed25519(name: &str) -> KeyResult<KeyPair> {
    derive(Curve::Ed25519, name)
}

/// Sr25519 key for a chain of hard junctions: `["Alice", "stash"]` is `//Alice//stash`.
pub fn derive_sr25519<S: AsRef<str>>(segments: &[S]) -> KeyResult<KeyPair> {
    Curve::Sr25519.derive(&DerivationPath::from_hard_segments(segments)?)
}

/// secp256k1 key for a single name, e.g. `"Alice"`.
pub fn derive_secp256k1(name: &str) -> KeyResult<KeyPair> {
    derive(Curve::Secp256k1, name)
}
