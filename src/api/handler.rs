//! Request handlers for the three routes.
//!
//! Each handler is a single-pass, stateless transformation from one incoming
//! request to one outgoing response. All remote and extraction failures are
//! converted here into structured error responses; nothing propagates as an
//! unhandled fault.

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use crate::api::responses::{
    error_response, extracted_response, summary_response, ResponseMode,
};
use crate::api::AppState;
use crate::errors::{ExtractError, SummarizeError};
use crate::extract::extract_text;
use crate::format::{self, SummaryFormat};

/// Summary length used when the form omits `length` or sends something
/// unparseable.
const DEFAULT_SUMMARY_LENGTH: u32 = 150;

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    text: String,
    length: Option<String>,
    format: Option<String>,
}

/// `GET /` - the main summarizer page.
pub async fn home() -> Html<String> {
    Html(crate::views::render_page(None, None))
}

/// `POST /summarize` - summarize pasted text.
pub async fn summarize(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SummarizeForm>,
) -> Response {
    let mode = ResponseMode::from_headers(&headers);

    if form.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Text is empty");
    }

    // Absent or invalid values fall back to defaults rather than erroring.
    let length = form
        .length
        .as_deref()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&l| l > 0)
        .unwrap_or(DEFAULT_SUMMARY_LENGTH);
    let summary_format = SummaryFormat::parse(form.format.as_deref().unwrap_or("narrative"));

    info!(length, format = ?summary_format, chars = form.text.len(), "summarize request");

    match state.client.summarize(&form.text, length).await {
        Ok(summary) => {
            let formatted = format::render(&summary, summary_format);
            summary_response(mode, &form.text, &formatted)
        }
        Err(err) => {
            error!(error = %err, "summarization failed");
            let status = match err {
                SummarizeError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                SummarizeError::Connection => StatusCode::SERVICE_UNAVAILABLE,
                SummarizeError::BadStatus { .. }
                | SummarizeError::MalformedResponse(_)
                | SummarizeError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, &err.to_string())
        }
    }
}

/// `POST /upload` - extract text from an uploaded PDF/DOCX/TXT file.
pub async fn upload(headers: HeaderMap, mut multipart: Multipart) -> Response {
    let mode = ResponseMode::from_headers(&headers);

    let mut upload: Option<(String, Vec<u8>)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                // A file part without a filename is an empty file picker,
                // not an unsupported type.
                if filename.is_empty() {
                    return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
                }
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some((filename, bytes.to_vec()));
                        break;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to read uploaded file");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            "Failed to read uploaded file",
                        );
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(err) => {
                error!(error = %err, "malformed multipart body");
                return error_response(StatusCode::BAD_REQUEST, "Invalid upload request");
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    info!(%filename, bytes = bytes.len(), "upload request");

    match extract_text(&filename, &bytes) {
        Ok(text) => extracted_response(mode, &text),
        Err(err) => {
            error!(error = %err, %filename, "extraction failed");
            let status = match err {
                ExtractError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
                ExtractError::InvalidUtf8 | ExtractError::Pdf(_) | ExtractError::Docx(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            error_response(status, &err.to_string())
        }
    }
}
