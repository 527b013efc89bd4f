//! Block-level constructs through the full pipeline.

use insta::assert_snapshot;
use summa_render::markdown_to_html;

#[test]
fn test_summary_with_header_paragraph_and_list() {
    let html = markdown_to_html(
        "## Summary\\n\\nKey point: **revenue** grew.\\n\\n- Item one\\n- Item two",
    );
    assert_snapshot!(html, @"<h2>Summary</h2><p>Key point: <strong>revenue</strong> grew.</p><ul><li>Item one</li><li>Item two</li></ul>");
}

#[test]
fn test_table_with_separator() {
    let html = markdown_to_html("| Metric | 2023 |\n|---|---|\n| Revenue | $5M |");
    assert_snapshot!(html, @r#"<table class="markdown-table"><thead><tr><th>Metric</th><th>2023</th></tr></thead><tbody><tr><td>Revenue</td><td>$5M</td></tr></tbody></table>"#);
}

#[test]
fn test_table_between_paragraphs() {
    let html = markdown_to_html("Comparison:\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nEnd.");
    assert!(html.starts_with("<p>Comparison:</p><table class=\"markdown-table\">"));
    assert!(html.ends_with("</table><p>End.</p>"));
    assert!(!html.contains("<p><table"));
}

#[test]
fn test_single_pipe_line_is_text() {
    assert_eq!(markdown_to_html("a | b"), "<p>a | b</p>");
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        markdown_to_html("1. First\n2. Second"),
        "<ol><li>First</li><li>Second</li></ol>"
    );
}

#[test]
fn test_unordered_then_ordered() {
    assert_eq!(
        markdown_to_html("- a\n- b\n\n1. c"),
        "<ul><li>a</li><li>b</li></ul><ol><li>c</li></ol>"
    );
}

#[test]
fn test_list_item_with_emphasis() {
    assert_eq!(
        markdown_to_html("- **Risk**: *liquidity*"),
        "<ul><li><strong>Risk</strong>: <em>liquidity</em></li></ul>"
    );
}

#[test]
fn test_fenced_code_block() {
    assert_snapshot!(
        markdown_to_html("```rust\nlet x = 1;\n```"),
        @r#"<pre><code class="language-rust">let x = 1;</code></pre>"#
    );
}

#[test]
fn test_multiline_fenced_code_keeps_newlines() {
    let html = markdown_to_html("Before\n\n```\nline 1\n\nline 2\n```\n\nAfter");
    assert_eq!(
        html,
        "<p>Before</p><pre><code class=\"language-plaintext\">line 1\n\nline 2</code></pre><p>After</p>"
    );
}

#[test]
fn test_horizontal_rules() {
    assert_eq!(markdown_to_html("a\n\n---\n\nb"), "<p>a</p><hr><p>b</p>");
    // italic runs first and claims a bare `***` line
    assert_eq!(markdown_to_html("***"), "<p><em>*</em></p>");
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        markdown_to_html("# Title\r\n\r\n---\r\n- a\r\n- b\r\n"),
        "<h1>Title</h1><hr><ul><li>a</li><li>b</li></ul>"
    );
    assert_eq!(
        markdown_to_html("1. one\r\n2. two\r\n\r\nClosing line\r\nsecond"),
        "<ol><li>one</li><li>two</li></ol><p>Closing line<br>second</p>"
    );
}

#[test]
fn test_blockquotes_stay_separate() {
    assert_eq!(
        markdown_to_html("> first\n> second"),
        "<blockquote>first</blockquote><blockquote>second</blockquote>"
    );
}

#[test]
fn test_headers_all_levels() {
    assert_eq!(
        markdown_to_html("# One\n## Two\n### Three"),
        "<h1>One</h1><h2>Two</h2><h3>Three</h3>"
    );
}

#[test]
fn test_header_followed_by_text_on_next_line() {
    assert_eq!(
        markdown_to_html("## Risks\nLiquidity is tight."),
        "<h2>Risks</h2><p>Liquidity is tight.</p>"
    );
}
