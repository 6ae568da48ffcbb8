use super::keypair::Curve;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("{curve} keys do not support derivation junctions ({junctions} given)")]
    UnsupportedJunctionForCurve { curve: Curve, junctions: usize },

    #[error("Unknown seed source: {0}")]
    UnknownSeedSource(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid secp256k1 scalar: {0}")]
    InvalidScalar(String),

    #[error("Invalid SS58 prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid public key length: {0} bytes")]
    InvalidPublicKeyLength(usize),

    #[error("Invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    #[error("SS58 checksum mismatch")]
    ChecksumMismatch,

    #[error("Invalid SS58 payload length: {0} bytes")]
    InvalidLength(usize),
}

impl KeyError {
    /// Stable machine-readable code, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            KeyError::InvalidDerivationPath(_) => "invalid_derivation_path",
            KeyError::UnsupportedJunctionForCurve { .. } => "unsupported_junction_for_curve",
            KeyError::UnknownSeedSource(_) => "unknown_seed_source",
            KeyError::DerivationFailed(_) => "derivation_failed",
            KeyError::InvalidScalar(_) => "invalid_scalar",
            KeyError::InvalidPrefix(_) => "invalid_prefix",
            KeyError::InvalidPublicKeyLength(_) => "invalid_public_key_length",
            KeyError::InvalidEncoding(_) => "invalid_encoding",
            KeyError::ChecksumMismatch => "checksum_mismatch",
            KeyError::InvalidLength(_) => "invalid_length",
        }
    }
}
