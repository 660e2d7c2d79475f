use std::error::Error;

use briefly::errors::{ExtractError, SummarizeError};

#[test]
fn test_summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::Timeout;
    assert_error(&error);
    let error = ExtractError::InvalidUtf8;
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    let error = SummarizeError::BadStatus {
        status: 500,
        body: "oops".to_string(),
    };
    assert_eq!(format!("{error}"), "API request failed (500): oops");

    let error = SummarizeError::MalformedResponse("[]".to_string());
    assert_eq!(format!("{error}"), "Unexpected API response format");

    let error = SummarizeError::Http("connection reset".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection reset"
    );
}

#[test]
fn test_timeout_and_connection_messages_mention_remedy() {
    assert!(
        format!("{}", SummarizeError::Timeout).contains("try again"),
        "Timeout message should suggest retrying"
    );
    assert!(
        format!("{}", SummarizeError::Connection).contains("connect"),
        "Connection message should indicate a connectivity failure"
    );
}

#[test]
fn test_extract_error_display() {
    let error = ExtractError::UnsupportedType("data.xyz".to_string());
    assert_eq!(format!("{error}"), "Unsupported file type: data.xyz");

    let error = ExtractError::Docx("bad archive".to_string());
    assert_eq!(format!("{error}"), "Failed to read DOCX: bad archive");
}
