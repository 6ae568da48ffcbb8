use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use std::time::Instant;

use super::schema::{
    AddressResponse, BatchDeriveRequest, DecodedAddressResponse, DerivedKeyResponse,
    DevAccountsQuery, DeriveQuery, EncodeQuery, KeyErrorResponse,
};
use crate::services::keys::{
    decode_ss58, encode_ss58, Curve, DerivationPath, KeyError, KeyPair, KeyResult, DEV_ACCOUNTS,
};
use crate::AppState;

type ApiError = (StatusCode, Json<KeyErrorResponse>);

fn bad_request(err: &KeyError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(KeyErrorResponse::from(err)))
}

/// Derive one key and record how long it took under the curve's label.
fn timed_derive(state: &AppState, curve: Curve, path: &str) -> KeyResult<KeyPair> {
    let start = Instant::now();
    let result = path
        .parse::<DerivationPath>()
        .and_then(|parsed| curve.derive(&parsed));

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    state
        .metrics
        .record_derivation(curve.as_str(), outcome, start.elapsed().as_secs_f64());

    result
}

fn describe(
    state: &AppState,
    curve: Curve,
    path: &str,
    prefix: u16,
) -> KeyResult<DerivedKeyResponse> {
    let pair = timed_derive(state, curve, path)?;
    DerivedKeyResponse::from_pair(path, &pair, prefix)
}

// =============================================================================
// GET /keys/derive - Derive a single key pair
// =============================================================================

pub async fn derive_key(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeriveQuery>,
) -> Result<Json<DerivedKeyResponse>, ApiError> {
    let prefix = query.prefix.unwrap_or(state.config.ss58_prefix);

    let response = describe(&state, query.curve, &query.path, prefix).map_err(|e| {
        tracing::warn!(curve = %query.curve, "Derivation failed: {}", e);
        bad_request(&e)
    })?;

    tracing::info!(curve = %query.curve, address = %response.address, "Derived key");
    Ok(Json(response))
}

// =============================================================================
// POST /keys/derive/batch - Derive several paths on one curve
// =============================================================================

pub async fn derive_batch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BatchDeriveRequest>,
) -> Result<Json<Vec<DerivedKeyResponse>>, ApiError> {
    let prefix = payload.prefix.unwrap_or(state.config.ss58_prefix);

    let mut responses = Vec::with_capacity(payload.paths.len());
    for path in &payload.paths {
        let response = describe(&state, payload.curve, path, prefix).map_err(|e| {
            tracing::warn!(curve = %payload.curve, "Batch derivation failed at '{}': {}", path, e);
            (
                StatusCode::BAD_REQUEST,
                Json(KeyErrorResponse {
                    error: format!("{}: {}", path, e),
                    kind: e.kind(),
                }),
            )
        })?;
        responses.push(response);
    }

    tracing::info!(curve = %payload.curve, count = responses.len(), "Derived batch");
    Ok(Json(responses))
}

// =============================================================================
// GET /keys/dev-accounts - Well-known development accounts
// =============================================================================

pub async fn get_dev_accounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DevAccountsQuery>,
) -> Result<Json<Vec<DerivedKeyResponse>>, ApiError> {
    let prefix = query.prefix.unwrap_or(state.config.ss58_prefix);

    // Sr25519 accounts use the `//Name` form; the other curves take the bare name.
    let responses = DEV_ACCOUNTS
        .iter()
        .map(|name| match query.curve {
            Curve::Sr25519 => format!("//{}", name),
            _ => name.to_string(),
        })
        .map(|path| describe(&state, query.curve, &path, prefix))
        .collect::<KeyResult<Vec<_>>>()
        .map_err(|e| bad_request(&e))?;

    Ok(Json(responses))
}

// =============================================================================
// GET /ss58/encode - Encode a public key as an SS58 address
// =============================================================================

pub async fn encode_address(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EncodeQuery>,
) -> Result<Json<AddressResponse>, ApiError> {
    let prefix = query.prefix.unwrap_or(state.config.ss58_prefix);
    let raw = query.public_key.trim_start_matches("0x");

    let result = hex::decode(raw)
        .map_err(|e| KeyError::InvalidEncoding(format!("public key is not hex: {}", e)))
        .and_then(|public_key| encode_ss58(prefix, &public_key));

    match result {
        Ok(address) => {
            state.metrics.record_ss58("encode", "ok");
            Ok(Json(AddressResponse { address, prefix }))
        }
        Err(e) => {
            state.metrics.record_ss58("encode", e.kind());
            Err(bad_request(&e))
        }
    }
}

// =============================================================================
// GET /ss58/decode/{address} - Decode and verify an SS58 address
// =============================================================================

pub async fn decode_address(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<DecodedAddressResponse>, ApiError> {
    match decode_ss58(&address) {
        Ok((prefix, public_key)) => {
            state.metrics.record_ss58("decode", "ok");
            Ok(Json(DecodedAddressResponse {
                address,
                prefix,
                public_key: format!("0x{}", hex::encode(public_key)),
            }))
        }
        Err(e) => {
            state.metrics.record_ss58("decode", e.kind());
            tracing::debug!("Rejected address {}: {}", address, e);
            Err(bad_request(&e))
        }
    }
}
