use polkadot_keys::config::environment::Config;
use polkadot_keys::services::metrics::MetricsRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polkadot_keys=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(ss58_prefix = config.ss58_prefix, "Loaded configuration");

    let metrics = MetricsRegistry::new()?;

    let bind_addr = config.bind_addr.clone();
    let app = polkadot_keys::create_app(config, metrics);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
