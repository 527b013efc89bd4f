//! Standalone page output
//!
//! Fragments are meant to be injected into an existing view. For previews and exported
//! reports the fragment can instead be wrapped in a complete HTML5 page with the baseline
//! stylesheet embedded.

use crate::util::html_escape;

const BASELINE_CSS: &str = include_str!("../css/summary.css");

/// The baseline stylesheet embedded in standalone pages.
pub fn default_css() -> &'static str {
    BASELINE_CSS
}

/// Options for [`wrap_in_document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Page title, escaped before use
    pub title: String,
    /// Optional CSS appended after the baseline
    pub custom_css: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self::new("Summary")
    }
}

impl DocumentOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Wrap a rendered fragment in a complete HTML document with embedded CSS
pub fn wrap_in_document(fragment: &str, options: &DocumentOptions) -> String {
    let escaped_title = html_escape(&options.title);
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="summa-render">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{custom_css}
  </style>
</head>
<body>
<div class="summa-document">
{fragment}
</div>
</body>
</html>"#
    )
}
