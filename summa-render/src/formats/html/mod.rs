//! HTML format
//!
//! Some summaries come back already rendered. They are only unescaped, never converted,
//! because running the Markdown pipeline over HTML corrupts it.

use crate::error::FormatError;
use crate::format::Format;
use crate::pipeline::clean_summary_content;

/// Format implementation for pre-rendered HTML summaries
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Pre-rendered HTML, passed through"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(clean_summary_content(source))
    }
}
