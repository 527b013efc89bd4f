//! Display flow tests
//!
//! Covers what a document view does with a payload: cleaning, detection, rendering, style
//! stripping and linkification.

use insta::assert_snapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use summa_render::display::{linkify_urls, strip_style_blocks};
use summa_render::{
    clean_summary_content, detect_content_kind, is_markdown, prepare_summary, ContentKind,
    DisplayOptions,
};

static ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<a href="([^"]+)""#).unwrap());

#[test]
fn test_double_escaped_payload_is_rendered() {
    let raw = "  ## Summary\\n\\nKey point: **revenue** grew.\\n\\n- Item one\\n- Item two  ";
    assert!(is_markdown(raw));
    assert_snapshot!(
        prepare_summary(raw, &DisplayOptions::default()),
        @"<h2>Summary</h2><p>Key point: <strong>revenue</strong> grew.</p><ul><li>Item one</li><li>Item two</li></ul>"
    );
}

#[test]
fn test_clean_then_detect() {
    let cleaned = clean_summary_content("\\n## Risks\\r\\n- Liquidity\\n");
    assert_eq!(cleaned, "## Risks\n- Liquidity");
    assert_eq!(detect_content_kind(&cleaned), ContentKind::Markdown);
}

#[test]
fn test_html_payload_keeps_markup_and_loses_styles() {
    let raw = r#"<style>.x { color: red; }</style><h3>Comparison</h3><p>See https://www.sec.gov/edgar.</p>"#;
    let html = prepare_summary(raw, &DisplayOptions::default());

    assert!(!html.contains("<style"));
    assert!(html.starts_with("<h3>Comparison</h3>"));
    let hrefs: Vec<&str> = ANCHOR
        .captures_iter(&html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    assert_eq!(hrefs, vec!["https://www.sec.gov/edgar"]);
    assert!(html.ends_with("</a>.</p>"));
}

#[test]
fn test_markdown_links_are_not_linkified_twice() {
    let html = prepare_summary(
        "Source: [EDGAR](https://www.sec.gov)",
        &DisplayOptions::default(),
    );
    assert_eq!(ANCHOR.captures_iter(&html).count(), 1);
}

#[test]
fn test_plain_text_is_escaped_and_wrapped() {
    let html = prepare_summary("Margin < 5% & falling", &DisplayOptions::default());
    assert_eq!(html, "<p>Margin &lt; 5% &amp; falling</p>");
}

#[test]
fn test_options_can_be_disabled() {
    let options = DisplayOptions {
        strip_styles: false,
        linkify_urls: false,
    };
    let raw = "<style>p{}</style><p>https://example.com</p>";
    assert_eq!(prepare_summary(raw, &options), raw);
}

#[test]
fn test_empty_payload() {
    assert_eq!(prepare_summary("", &DisplayOptions::default()), "");
    assert_eq!(prepare_summary("   ", &DisplayOptions::default()), "");
}

#[test]
fn test_strip_style_blocks_multiline() {
    assert_eq!(
        strip_style_blocks("<p>a</p>\n<style media=\"print\">\nbody {}\n</style>\n<p>b</p>"),
        "<p>a</p>\n\n<p>b</p>"
    );
}

#[test]
fn test_linkify_keeps_trailing_parenthesis_outside() {
    assert_eq!(
        linkify_urls("(see http://example.com)"),
        r#"(see <a href="http://example.com" target="_blank" rel="noopener noreferrer">http://example.com</a>)"#
    );
}
