//! Summary display flow
//!
//! What a document view does with a summary payload before injecting it: clean the transport
//! escaping, decide whether it is Markdown, HTML or plain text, render it, then drop embedded
//! `<style>` blocks and turn bare URLs into links.
//!
//! None of this is sanitization. Script tags, event handler attributes and `javascript:` link
//! targets all survive.

use crate::pipeline::{
    clean_summary_content, detect_content_kind, markdown_to_html, plain_text_to_html,
    ContentKind,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;
use url::Url;

static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
});

// Anchors, code, preformatted blocks and tags are matched whole so URLs inside them are
// skipped; only the last alternative is a linkification candidate.
static LINKIFY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<a\b[^>]*>.*?</a>|<pre\b[^>]*>.*?</pre>|<code\b[^>]*>.*?</code>|<[^>]+>|https?://[^\s<>"']+"#,
    )
    .expect("valid regex for bare urls")
});

/// Post-processing applied to rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Remove `<style>` blocks carried in by the payload
    pub strip_styles: bool,
    /// Wrap bare `http(s)://` URLs in anchors
    pub linkify_urls: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            strip_styles: true,
            linkify_urls: true,
        }
    }
}

impl DisplayOptions {
    /// Options that leave rendered HTML untouched.
    pub fn none() -> Self {
        Self {
            strip_styles: false,
            linkify_urls: false,
        }
    }
}

/// Cleans, classifies and renders a raw payload without display post-processing.
pub fn render_content(raw: &str) -> (ContentKind, String) {
    let cleaned = clean_summary_content(raw);
    let kind = detect_content_kind(&cleaned);
    debug!(%kind, len = cleaned.len(), "detected summary content");

    let html = match kind {
        ContentKind::Markdown => markdown_to_html(&cleaned),
        ContentKind::Html => cleaned,
        ContentKind::PlainText => plain_text_to_html(&cleaned),
    };
    (kind, html)
}

/// The full display flow for one summary payload.
pub fn prepare_summary(raw: &str, options: &DisplayOptions) -> String {
    let (_, html) = render_content(raw);
    apply_display_options(&html, options)
}

/// Applies style stripping and linkification as configured.
pub fn apply_display_options(html: &str, options: &DisplayOptions) -> String {
    let mut html = html.to_string();
    if options.strip_styles {
        html = strip_style_blocks(&html);
    }
    if options.linkify_urls {
        html = linkify_urls(&html);
    }
    html
}

/// Removes every `<style>…</style>` block.
pub fn strip_style_blocks(html: &str) -> String {
    STYLE_BLOCK.replace_all(html, "").into_owned()
}

/// Wraps bare URLs in anchors, leaving existing anchors, code and attribute values alone.
pub fn linkify_urls(html: &str) -> String {
    LINKIFY_TOKEN
        .replace_all(html, |caps: &Captures| {
            let token = &caps[0];
            if token.starts_with('<') {
                token.to_string()
            } else {
                linkify_candidate(token)
            }
        })
        .into_owned()
}

fn linkify_candidate(candidate: &str) -> String {
    let trimmed =
        candidate.trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')'));
    let tail = &candidate[trimmed.len()..];

    match Url::parse(trimmed) {
        Ok(url) if url.host_str().is_some() => format!(
            r#"<a href="{trimmed}" target="_blank" rel="noopener noreferrer">{trimmed}</a>{tail}"#
        ),
        _ => candidate.to_string(),
    }
}
