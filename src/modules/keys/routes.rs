use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn keys_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/derive", get(controller::derive_key))
        .route("/derive/batch", post(controller::derive_batch))
        .route("/dev-accounts", get(controller::get_dev_accounts))
}

pub fn ss58_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/encode", get(controller::encode_address))
        .route("/decode/{address}", get(controller::decode_address))
}
