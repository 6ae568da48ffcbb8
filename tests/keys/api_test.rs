use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::setup_test_server;

// =============================================================================
// INTEGRATION TESTS - HEALTH AND METRICS
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = setup_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_endpoint_reports_requests() {
    let server = setup_test_server();

    server
        .get("/keys/derive")
        .add_query_param("curve", "ed25519")
        .add_query_param("path", "Alice")
        .await
        .assert_status_ok();

    let response = server.get("/metrics").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("keys_http_requests_total"));
    assert!(body.contains("keys_derivations_total"));
    assert!(body.contains("curve=\"ed25519\""));

    println!("Metrics exported: {} bytes", body.len());
}

// =============================================================================
// INTEGRATION TESTS - DERIVATION ENDPOINTS (GET /keys/derive, POST /keys/derive/batch)
// =============================================================================

#[tokio::test]
async fn test_derive_uses_configured_prefix() {
    let server = setup_test_server();

    let response = server
        .get("/keys/derive")
        .add_query_param("curve", "secp256k1")
        .add_query_param("path", "Alice")
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["curve"], "secp256k1");
    assert_eq!(json["prefix"], 49);
    assert_eq!(
        json["public_key"],
        "0x020a1091341fe5664bfa1782d5e04779689068c916b04cb365ec3153755684d9a1"
    );
    assert_eq!(json["address"], "NaqsuM2ZDssHFdr7HU8znFsHKpgkCyrCW6aPiLpLTa8Vxi3Q9");
}

#[tokio::test]
async fn test_derive_accepts_curve_alias() {
    let server = setup_test_server();

    let response = server
        .get("/keys/derive")
        .add_query_param("curve", "ecdsa")
        .add_query_param("path", "Alice")
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["curve"], "secp256k1");
    assert_eq!(json["address"], "NaqsuM2ZDssHFdr7HU8znFsHKpgkCyrCW6aPiLpLTa8Vxi3Q9");
}

#[tokio::test]
async fn test_derive_with_explicit_prefix() {
    let server = setup_test_server();

    let response = server
        .get("/keys/derive")
        .add_query_param("curve", "sr25519")
        .add_query_param("path", "//Alice//stash")
        .add_query_param("prefix", "42")
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["path"], "//Alice//stash");
    assert_eq!(json["address"], "5GNJqTPyNqANBkUVMN1LPPrxXnFouWXoe2wNSmmEoLctxiZY");
}

#[tokio::test]
async fn test_derive_rejects_junction_on_ed25519() {
    let server = setup_test_server();

    let response = server
        .get("/keys/derive")
        .add_query_param("curve", "ed25519")
        .add_query_param("path", "Alice//stash")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["kind"], "unsupported_junction_for_curve");
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_derive_rejects_out_of_range_prefix() {
    let server = setup_test_server();

    let response = server
        .get("/keys/derive")
        .add_query_param("curve", "ed25519")
        .add_query_param("path", "Alice")
        .add_query_param("prefix", "16384")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["kind"], "invalid_prefix");
}

#[tokio::test]
async fn test_batch_derivation() {
    let server = setup_test_server();

    let payload = json!({
        "curve": "sr25519",
        "paths": ["//Alice", "//Bob", "//Alice//stash"],
        "prefix": 42
    });

    let response = server.post("/keys/derive/batch").json(&payload).await;
    response.assert_status_ok();

    let json: Value = response.json();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["address"], "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
    assert_eq!(items[1]["address"], "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty");
    assert_eq!(items[2]["address"], "5GNJqTPyNqANBkUVMN1LPPrxXnFouWXoe2wNSmmEoLctxiZY");
}

#[tokio::test]
async fn test_batch_stops_at_bad_path() {
    let server = setup_test_server();

    let payload = json!({
        "curve": "sr25519",
        "paths": ["//Alice", "//Bob//"]
    });

    let response = server.post("/keys/derive/batch").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["kind"], "invalid_derivation_path");
    assert!(json["error"].as_str().unwrap().starts_with("//Bob//"));
}

#[tokio::test]
async fn test_dev_accounts() {
    let server = setup_test_server();

    let response = server
        .get("/keys/dev-accounts")
        .add_query_param("curve", "sr25519")
        .add_query_param("prefix", "42")
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["path"], "//Alice");
    assert_eq!(items[0]["address"], "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
    assert_eq!(items[1]["address"], "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty");
}

// =============================================================================
// INTEGRATION TESTS - SS58 ENDPOINTS (GET /ss58/encode, GET /ss58/decode/{address})
// =============================================================================

#[tokio::test]
async fn test_encode_address() {
    let server = setup_test_server();

    let response = server
        .get("/ss58/encode")
        .add_query_param(
            "public_key",
            "0x88dc3417d5058ec4b4503e0c12ea1a0a89be200fe98922423d4334014fa6b0ee",
        )
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["prefix"], 49);
    assert_eq!(json["address"], "5wfmbM1KN4DCJeTP6jj9TqCAKKNApYNCG4zhwcweWhXZRo1j");
}

#[tokio::test]
async fn test_encode_rejects_bad_key_length() {
    let server = setup_test_server();

    let response = server
        .get("/ss58/encode")
        .add_query_param("public_key", "deadbeef")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["kind"], "invalid_public_key_length");
}

#[tokio::test]
async fn test_decode_address() {
    let server = setup_test_server();

    let response = server
        .get("/ss58/decode/5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY")
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["prefix"], 42);
    assert_eq!(
        json["public_key"],
        "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"
    );
}

#[tokio::test]
async fn test_decode_rejects_corrupted_address() {
    let server = setup_test_server();

    // last character changed from 'Y' to 'Z'
    let response = server
        .get("/ss58/decode/5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQZ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["kind"], "checksum_mismatch");
}
