//! HTTP surface: router construction and request handlers.

pub mod handler;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::ai::SummaryClient;
use crate::core::config::AppConfig;

/// Shared application state: immutable configuration plus the summarization
/// client. Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub client: SummaryClient,
}

/// Builds the application router.
pub fn router(config: &AppConfig) -> Result<Router, reqwest::Error> {
    let state = AppState {
        client: SummaryClient::new(config)?,
    };

    Ok(Router::new()
        .route("/", get(handler::home))
        .route("/summarize", post(handler::summarize))
        .route("/upload", post(handler::upload))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
