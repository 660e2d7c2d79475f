use std::env;

/// Default summarization model endpoint, used when `HUGGINGFACE_API_URL`
/// is not set.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

/// Ceiling on the outbound summarization call, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Process-wide configuration, loaded once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: String,
    pub request_timeout_secs: u64,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_url: env::var("HUGGINGFACE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_token: env::var("HUGGINGFACE_API_TOKEN").map_err(|_| {
                "HUGGINGFACE_API_TOKEN not found in environment variables. \
                 Please ensure your .env file is correctly configured and loaded."
                    .to_string()
            })?,
            request_timeout_secs: env::var("HUGGINGFACE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        })
    }
}
