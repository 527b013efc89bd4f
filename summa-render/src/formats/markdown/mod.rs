//! Markdown format
//!
//! The common case: summaries and comparison reports are generated as Markdown. Rendering
//! cleans transport escaping and runs the pass pipeline from [`crate::pipeline`].

use crate::error::FormatError;
use crate::format::Format;
use crate::pipeline::{clean_summary_content, markdown_to_html};

/// Format implementation for Markdown summaries
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown summary text"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(markdown_to_html(&clean_summary_content(source)))
    }
}
