//! Response builders shared by the handlers.
//!
//! Successful requests answer in one of two shapes, chosen once per request:
//! a JSON payload for callers flagged as machine-readable, or the full page
//! view otherwise. Failures are always JSON `{"error": ...}` with a status
//! reflecting the failure category.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::views;

/// Whether the caller wants a structured payload or a rendered page.
///
/// Computed once per request from the `X-Requested-With` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Json,
    Page,
}

impl ResponseMode {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_xhr = headers
            .get("x-requested-with")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "XMLHttpRequest");
        if is_xhr {
            ResponseMode::Json
        } else {
            ResponseMode::Page
        }
    }
}

/// Successful summarization: `{summary, original}` or the page carrying both.
pub fn summary_response(mode: ResponseMode, original: &str, summary: &str) -> Response {
    match mode {
        ResponseMode::Json => {
            Json(json!({ "summary": summary, "original": original })).into_response()
        }
        ResponseMode::Page => {
            Html(views::render_page(Some(original), Some(summary))).into_response()
        }
    }
}

/// Successful extraction: `{text}` or the page pre-populated with it.
pub fn extracted_response(mode: ResponseMode, text: &str) -> Response {
    match mode {
        ResponseMode::Json => Json(json!({ "text": text })).into_response(),
        ResponseMode::Page => Html(views::render_page(Some(text), None)).into_response(),
    }
}

/// Failure: JSON `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
