//! Uploaded-document text extraction.
//!
//! Dispatches on the declared filename suffix and converts the raw upload
//! bytes into plain text. No layout or structure is preserved.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::errors::ExtractError;

/// Extracts the plain-text content of an uploaded file.
///
/// The filename suffix selects the strategy, case-insensitively: `.pdf`,
/// `.docx` or `.txt`. Any other suffix is rejected as unsupported.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let lowered = filename.to_lowercase();

    if lowered.ends_with(".pdf") {
        extract_pdf(bytes)
    } else if lowered.ends_with(".docx") {
        extract_docx(bytes)
    } else if lowered.ends_with(".txt") {
        String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidUtf8)
    } else {
        Err(ExtractError::UnsupportedType(filename.to_string()))
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Concatenates each paragraph's run text, paragraphs joined with newlines
/// in document order.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}
