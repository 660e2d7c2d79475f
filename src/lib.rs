/// Briefly - a small web service that summarizes user text with a remote
/// Hugging Face inference endpoint.
///
/// The service accepts text typed into a form or uploaded as a PDF, DOCX or
/// TXT file, forwards it to the configured summarization model, and renders
/// the result as narrative prose, a bullet list, or a one-cell table.
///
/// # Architecture
///
/// The system uses:
/// - Axum for the HTTP surface (`GET /`, `POST /summarize`, `POST /upload`)
/// - reqwest for the outbound call to the summarization endpoint
/// - pdf-extract and docx-rs for document text extraction
/// - Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use briefly::api::router;
/// use briefly::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     briefly::setup_logging();
///
///     let config = AppConfig {
///         api_url: "https://example.com/models/summarizer".to_string(),
///         api_token: "dummy_token".to_string(),
///         request_timeout_secs: 60,
///         host: "127.0.0.1".to_string(),
///         port: 5000,
///     };
///
///     let app = router(&config)?;
///     let listener = tokio::net::TcpListener::bind(("127.0.0.1", 5000)).await?;
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod extract;
pub mod format;
pub mod views;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an env-filter layer so verbosity is
/// controlled through `RUST_LOG` (default `info`). Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,briefly=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
