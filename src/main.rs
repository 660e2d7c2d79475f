// Main entry point for the summarizer web server

use anyhow::{Context, Result};
use briefly::api::router;
use briefly::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables from .env take effect before configuration loads
    dotenvy::dotenv().ok();

    briefly::setup_logging();

    // Missing credentials are fatal; the process never serves traffic
    // without a token.
    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    tracing::info!("Configuration loaded");

    let app = router(&config).context("Failed to build HTTP client")?;

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
