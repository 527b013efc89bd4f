//! Plain text format
//!
//! Text without markup is escaped and split into paragraphs; asterisks and underscores are
//! left as they are.

use crate::error::FormatError;
use crate::format::Format;
use crate::pipeline::{clean_summary_content, plain_text_to_html};

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, escaped and wrapped in paragraphs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(plain_text_to_html(&clean_summary_content(source)))
    }
}
