//! Format trait definition
//!
//! An input format knows how to turn one kind of summary payload into an HTML fragment.
//! Display post-processing and page wrapping are applied afterwards by the
//! [`crate::FormatRegistry`], so formats only deal with their own syntax.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for summary input formats
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn render(&self, source: &str) -> Result<String, FormatError> {
///         Ok(format!("<p>{}</p>", source.to_uppercase()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render source text into an HTML fragment
    fn render(&self, source: &str) -> Result<String, FormatError>;

    /// Render with format-specific parameters.
    ///
    /// The default implementation delegates to [`Format::render`] and rejects any parameter,
    /// formats that take options override it.
    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(source)
        } else {
            let mut keys: Vec<_> = options.keys().map(String::as_str).collect();
            keys.sort_unstable();
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not accept parameters: {}",
                self.name(),
                keys.join(", ")
            )))
        }
    }
}
