//! Summarization endpoint client
//!
//! Encapsulates the outbound call to the Hugging Face inference API.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

/// Lower bound on generated summary length, passed with every request.
/// Not user-configurable.
const MIN_SUMMARY_LENGTH: u32 = 40;

/// Client for the remote summarization endpoint.
///
/// Holds the endpoint URL, the bearer credential and a reqwest client with
/// the request timeout baked in. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Clone)]
pub struct SummaryClient {
    http: Client,
    api_url: String,
    api_token: String,
}

impl SummaryClient {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Sends one summarization request and returns the generated summary.
    ///
    /// A single attempt per call; the caller decides whether a failure is
    /// surfaced or retried.
    pub async fn summarize(
        &self,
        text: &str,
        max_length: u32,
    ) -> Result<String, SummarizeError> {
        let payload = json!({
            "inputs": text,
            "parameters": {
                "max_length": max_length,
                "min_length": MIN_SUMMARY_LENGTH,
                "do_sample": false
            }
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "API request failed");
            return Err(SummarizeError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let output: Value = serde_json::from_str(&raw)
            .map_err(|_| SummarizeError::MalformedResponse(raw.clone()))?;

        // The endpoint answers with a one-element array of generations.
        let summary = output
            .get(0)
            .and_then(|item| item.get("summary_text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                error!(%raw, "unexpected API response format");
                SummarizeError::MalformedResponse(raw.clone())
            })?;

        info!(chars = summary.len(), "summary generated");
        Ok(summary.to_string())
    }
}
