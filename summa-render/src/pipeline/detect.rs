//! Format detection
//!
//! Decides whether a payload should go through the Markdown pipeline or be treated as
//! pre-rendered HTML. Detection only looks at the shape of the text, it never validates
//! structure: a lone `| a | b |` line counts as a table signal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static MARKDOWN_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // ATX headers
        r"(?m)^#{1,6}\s",
        // bold
        r"\*\*.+?\*\*",
        // links
        r"\[.+?\]\(.+?\)",
        // unordered list items
        r"(?m)^\s*[-*+]\s",
        // ordered list items
        r"(?m)^\s*\d+\.\s",
        // table rows
        r"(?mR)^\|.*\|$",
        // fenced code
        r"```",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid markdown signal pattern"))
    .collect()
});

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

const CODE_FENCE: &str = "```";

/// What a payload looks like to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Markdown,
    Html,
    PlainText,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Markdown => "markdown",
            ContentKind::Html => "html",
            ContentKind::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `raw` should be rendered as Markdown.
///
/// HTML tags win over Markdown signals, except when the text also holds a code fence: that
/// combination is taken to be Markdown that happens to quote HTML in a code block.
pub fn is_markdown(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }

    let text = raw.replace("\\n", "\n");
    if HTML_TAG.is_match(&text) && !text.contains(CODE_FENCE) {
        return false;
    }

    MARKDOWN_SIGNALS.iter().any(|signal| signal.is_match(&text))
}

/// Classifies a payload as Markdown, pre-rendered HTML, or plain text.
pub fn detect_content_kind(raw: &str) -> ContentKind {
    if is_markdown(raw) {
        ContentKind::Markdown
    } else if HTML_TAG.is_match(&raw.replace("\\n", "\n")) {
        ContentKind::Html
    } else {
        ContentKind::PlainText
    }
}
