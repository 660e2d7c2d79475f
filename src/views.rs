//! Page view rendering.
//!
//! The page is a pure function of the request's text blobs: the main page
//! with an empty form, or the same page re-populated with the submitted text
//! and its formatted summary. Formatted summaries may carry HTML fragments
//! (bullet/table renderings) and are inserted as-is; user text is escaped.

/// Escapes text for insertion into HTML element content or an attribute.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the summarizer page.
///
/// `original` pre-populates the text area; `summary` fills the result panel.
/// Both default to empty for the main page.
pub fn render_page(original: Option<&str>, summary: Option<&str>) -> String {
    let original = escape_html(original.unwrap_or(""));
    let summary_block = match summary {
        Some(summary) => format!(
            "<div class=\"card\"><div class=\"card-header\">Summary</div>\
             <div class=\"card-body\" id=\"summary\">{summary}</div></div>"
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Briefly - Text Summarizer</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
</head>
<body class="container py-4">
<h1>Briefly</h1>
<form method="post" action="/upload" enctype="multipart/form-data" class="mb-3">
  <input type="file" name="file" accept=".pdf,.docx,.txt">
  <button type="submit" class="btn btn-secondary">Extract text</button>
</form>
<form method="post" action="/summarize">
  <textarea name="text" rows="10" class="form-control mb-2" placeholder="Paste text to summarize...">{original}</textarea>
  <div class="row mb-2">
    <div class="col">
      <label>Length <input type="number" name="length" value="150" class="form-control"></label>
    </div>
    <div class="col">
      <label>Format
        <select name="format" class="form-select">
          <option value="narrative">Narrative</option>
          <option value="bullet">Bullet points</option>
          <option value="table">Table</option>
        </select>
      </label>
    </div>
  </div>
  <button type="submit" class="btn btn-primary">Summarize</button>
</form>
{summary_block}
</body>
</html>
"#
    )
}
