//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available input formats. Formats can
//! be registered and retrieved by name, detected from a filename, or picked from the content
//! itself with [`FormatRegistry::render_auto`].

use crate::display::{apply_display_options, DisplayOptions};
use crate::document::{wrap_in_document, DocumentOptions};
use crate::error::FormatError;
use crate::format::Format;
use crate::pipeline::{clean_summary_content, detect_content_kind, ContentKind};
use std::collections::HashMap;
use tracing::debug;

/// Everything applied around a format's own rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Post-processing of the rendered fragment
    pub display: DisplayOptions,
    /// Wrap the fragment in a standalone page when set
    pub document: Option<DocumentOptions>,
    /// Format-specific parameters, passed to [`Format::render_with_options`]
    pub extra: HashMap<String, String>,
}

/// Registry of input formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.render("**Revenue** grew", "markdown")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Pick a format for `source` by looking at its content
    ///
    /// Markdown goes to `markdown`, pre-rendered HTML to `html`, and anything else to `text`.
    pub fn detect_format_from_content(&self, source: &str) -> &'static str {
        match detect_content_kind(&clean_summary_content(source)) {
            ContentKind::Markdown => "markdown",
            ContentKind::Html => "html",
            ContentKind::PlainText => "text",
        }
    }

    /// Render source text with the named format and default options
    pub fn render(&self, source: &str, format: &str) -> Result<String, FormatError> {
        self.render_with_options(source, format, &RenderOptions::default())
    }

    /// Render source text with the named format and the given options
    pub fn render_with_options(
        &self,
        source: &str,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        let fragment = fmt.render_with_options(source, &options.extra)?;
        let fragment = apply_display_options(&fragment, &options.display);
        debug!(format, len = fragment.len(), "rendered summary");

        Ok(match &options.document {
            Some(document) => wrap_in_document(&fragment, document),
            None => fragment,
        })
    }

    /// Render source text with a format chosen by [`Self::detect_format_from_content`]
    pub fn render_auto(&self, source: &str, options: &RenderOptions) -> Result<String, FormatError> {
        let format = self.detect_format_from_content(source);
        debug!(format, "auto-detected input format");
        self.render_with_options(source, format, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
