//! baseline-ui - Baseline badge service
//!
//! Serves embeddable Baseline compatibility badges and a JSON status API,
//! backed by per-request lookups against the WebStatus compatibility
//! endpoint.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use baseline_common::config::ServiceConfig;
use baseline_ui::services::WebStatusClient;
use baseline_ui::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting baseline-ui (badge service)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::load(None)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    info!("Compatibility API: {}", config.api_base_url);

    let client = WebStatusClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to create WebStatus client: {}", e))?;

    let bind_addr = config.bind_addr();
    let state = AppState::new(config, client);
    let app = baseline_ui::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
