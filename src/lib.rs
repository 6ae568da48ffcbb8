pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use modules::keys::{keys_routes, ss58_routes};
use modules::metrics::metrics_routes;
use services::metrics::{metrics_middleware, MetricsRegistry};

pub struct AppState {
    pub config: Config,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(config: Config, metrics: Arc<MetricsRegistry>) -> Router {
    let state = Arc::new(AppState { config, metrics });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/keys", keys_routes())
        .nest("/ss58", ss58_routes())
        .merge(metrics_routes())
        .layer(middleware::from_fn_with_state(state.clone(), metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Polkadot Key Derivation API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
