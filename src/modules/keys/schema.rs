use serde::{Deserialize, Serialize};

use crate::services::keys::{Curve, KeyError, KeyPair, KeyResult};

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct DeriveQuery {
    pub curve: Curve,
    /// `Alice`, `//Alice//stash`, `0x<seed>//0`, ...
    pub path: String,
    pub prefix: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct BatchDeriveRequest {
    pub curve: Curve,
    pub paths: Vec<String>,
    pub prefix: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct DevAccountsQuery {
    pub curve: Curve,
    pub prefix: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct EncodeQuery {
    /// Hex, with or without `0x`.
    pub public_key: String,
    pub prefix: Option<u16>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct DerivedKeyResponse {
    pub curve: Curve,
    pub path: String,
    pub public_key: String,
    pub address: String,
    pub prefix: u16,
}

impl DerivedKeyResponse {
    pub fn from_pair(path: &str, pair: &KeyPair, prefix: u16) -> KeyResult<Self> {
        Ok(Self {
            curve: pair.curve(),
            path: path.to_string(),
            public_key: format!("0x{}", hex::encode(pair.public_key())),
            address: pair.to_ss58(prefix)?,
            prefix,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: String,
    pub prefix: u16,
}

#[derive(Debug, Serialize)]
pub struct DecodedAddressResponse {
    pub address: String,
    pub prefix: u16,
    pub public_key: String,
}

#[derive(Debug, Serialize)]
pub struct KeyErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

impl From<&KeyError> for KeyErrorResponse {
    fn from(err: &KeyError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}
