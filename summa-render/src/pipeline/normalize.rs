//! Transport unescaping
//!
//! Summaries pass through a JSON layer that sometimes escapes them twice, so the text we get
//! still contains the two-character sequences `\n`, `\r`, `\t` and `\"` instead of the
//! characters they stand for. Both the normalizer and the first pipeline pass undo that.

/// Replaces literal escape sequences with the characters they stand for.
///
/// A literal `\r` is dropped rather than translated, so a literal `\r\n` ends up as a single
/// newline.
pub fn unescape(input: &str) -> String {
    input
        .replace("\\n", "\n")
        .replace("\\r", "")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
}

/// Strips transport escaping and surrounding whitespace from raw summary text.
///
/// Returns an empty string for empty input. Runs before any structural parsing, and is safe to
/// combine with [`super::markdown_to_html`], whose first pass performs the same unescaping.
pub fn clean_summary_content(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    unescape(raw).trim().to_string()
}
