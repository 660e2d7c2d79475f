use thiserror::Error;

/// Failures from the outbound call to the summarization endpoint.
///
/// Every variant maps to a distinct HTTP status at the handler boundary, so
/// callers match on a closed set instead of inspecting error strings.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Summarization request timed out. Please try again.")]
    Timeout,

    #[error("Could not connect to the summarization endpoint. Please check your internet connection.")]
    Connection,

    #[error("API request failed ({status}): {body}")]
    BadStatus { status: u16, body: String },

    #[error("Unexpected API response format")]
    MalformedResponse(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummarizeError::Timeout
        } else if error.is_connect() {
            SummarizeError::Connection
        } else {
            SummarizeError::Http(error.to_string())
        }
    }
}

/// Failures while turning an uploaded file into plain text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),
}
