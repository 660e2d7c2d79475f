//! Summary display formatting.
//!
//! Pure text-to-text shaping of a generated summary; no failure mode. The
//! bullet and table renderings emit the HTML fragments the page expects.

/// How a summary is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Narrative,
    Bullet,
    Table,
}

impl SummaryFormat {
    /// Lenient parse; anything unrecognized falls back to narrative.
    pub fn parse(value: &str) -> Self {
        match value {
            "bullet" => SummaryFormat::Bullet,
            "table" => SummaryFormat::Table,
            _ => SummaryFormat::Narrative,
        }
    }
}

/// Renders a summary in the requested format.
pub fn render(summary: &str, format: SummaryFormat) -> String {
    match format {
        SummaryFormat::Narrative => summary.to_string(),
        SummaryFormat::Bullet => {
            // Treat ". " as the sentence boundary; a summary without one
            // renders as a single bullet.
            let broken = summary.replace(". ", ".\n");
            broken
                .split('\n')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|point| format!("\u{2022} {point}"))
                .collect::<Vec<_>>()
                .join("<br>")
        }
        SummaryFormat::Table => format!(
            "<table class='table table-bordered'><tr><td>{summary}</td></tr></table>"
        ),
    }
}
