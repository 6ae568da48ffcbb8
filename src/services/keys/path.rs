use std::str::FromStr;

use super::error::{KeyError, KeyResult};
use super::hashing::{blake2_256, scale_encode_str};

/// Length of the chain code carried by every junction.
pub const JUNCTION_ID_LEN: usize = 32;

/// One segment of a derivation path.
///
/// `Hard` junctions can only be followed from the secret key; `Soft` junctions
/// can also be followed from a public key alone (sr25519 only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    Hard([u8; JUNCTION_ID_LEN]),
    Soft([u8; JUNCTION_ID_LEN]),
}

impl Junction {
    pub fn hard(token: &str) -> Self {
        Junction::Hard(chain_code(token))
    }

    pub fn soft(token: &str) -> Self {
        Junction::Soft(chain_code(token))
    }

    pub fn chain_code(&self) -> &[u8; JUNCTION_ID_LEN] {
        match self {
            Junction::Hard(cc) | Junction::Soft(cc) => cc,
        }
    }

    pub fn is_hard(&self) -> bool {
        matches!(self, Junction::Hard(_))
    }
}

/// Numeric tokens are encoded as a little-endian u64, everything else as a
/// SCALE string. Encodings longer than 32 bytes are replaced by their hash.
fn chain_code(token: &str) -> [u8; JUNCTION_ID_LEN] {
    let encoded = match token.parse::<u64>() {
        Ok(index) => index.to_le_bytes().to_vec(),
        Err(_) => scale_encode_str(token),
    };

    let mut cc = [0u8; JUNCTION_ID_LEN];
    if encoded.len() > JUNCTION_ID_LEN {
        cc.copy_from_slice(&blake2_256(&[encoded.as_slice()]));
    } else {
        cc[..encoded.len()].copy_from_slice(&encoded);
    }
    cc
}

/// A parsed derivation path such as `Alice//stash` or `//Alice/0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    seed: Option<String>,
    junctions: Vec<Junction>,
}

impl DerivationPath {
    pub fn new(seed: Option<String>, junctions: Vec<Junction>) -> Self {
        Self { seed, junctions }
    }

    /// Path made of hard junctions only, rooted at the development seed.
    /// `["Alice", "stash"]` is equivalent to `//Alice//stash`.
    pub fn from_hard_segments<S: AsRef<str>>(segments: &[S]) -> KeyResult<Self> {
        if segments.is_empty() {
            return Err(KeyError::InvalidDerivationPath(
                "at least one path segment is required".to_string(),
            ));
        }

        let mut junctions = Vec::with_capacity(segments.len());
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() || segment.contains('/') {
                return Err(KeyError::InvalidDerivationPath(format!(
                    "invalid path segment '{}'",
                    segment
                )));
            }
            junctions.push(Junction::hard(segment));
        }

        Ok(Self::new(None, junctions))
    }

    /// Base seed name, `None` when the path starts with a junction.
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }
}

impl FromStr for DerivationPath {
    type Err = KeyError;

    fn from_str(path: &str) -> KeyResult<Self> {
        if path.is_empty() {
            return Err(KeyError::InvalidDerivationPath("empty path".to_string()));
        }

        let (base, mut rest) = match path.find('/') {
            Some(idx) => (&path[..idx], &path[idx..]),
            None => (path, ""),
        };
        let seed = (!base.is_empty()).then(|| base.to_string());

        let mut junctions = Vec::new();
        while !rest.is_empty() {
            // `rest` always starts with '/'
            let (hard, body) = match rest.strip_prefix("//") {
                Some(body) => (true, body),
                None => (false, &rest[1..]),
            };

            let end = body.find('/').unwrap_or(body.len());
            let token = &body[..end];
            if token.is_empty() {
                return Err(KeyError::InvalidDerivationPath(format!(
                    "empty junction in '{}'",
                    path
                )));
            }

            junctions.push(if hard {
                Junction::hard(token)
            } else {
                Junction::soft(token)
            });
            rest = &body[end..];
        }

        Ok(Self { seed, junctions })
    }
}
