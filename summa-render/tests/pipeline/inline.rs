//! Inline constructs through the full pipeline.

use summa_render::markdown_to_html;

#[test]
fn test_bold_is_wrapped_in_paragraph() {
    assert_eq!(markdown_to_html("**bold**"), "<p><strong>bold</strong></p>");
}

#[test]
fn test_bold_underscores_and_italic() {
    assert_eq!(
        markdown_to_html("__strong__ and _soft_"),
        "<p><strong>strong</strong> and <em>soft</em></p>"
    );
}

#[test]
fn test_link_has_safe_target() {
    assert_eq!(
        markdown_to_html("[EDGAR](https://www.sec.gov)"),
        r#"<p><a href="https://www.sec.gov" target="_blank" rel="noopener noreferrer">EDGAR</a></p>"#
    );
}

#[test]
fn test_image_is_not_turned_into_link() {
    let html = markdown_to_html("![chart](chart.png)");
    assert_eq!(html, r#"<p><img src="chart.png" alt="chart" /></p>"#);
    assert!(!html.contains("<a "));
}

#[test]
fn test_link_and_image_on_one_line() {
    let html = markdown_to_html("[filing](f.htm) ![logo](l.png)");
    assert_eq!(html.matches("<a href=").count(), 1);
    assert_eq!(html.matches("<img ").count(), 1);
}

#[test]
fn test_inline_code() {
    assert_eq!(
        markdown_to_html("Use `summa render`."),
        "<p>Use <code>summa render</code>.</p>"
    );
}

#[test]
fn test_soft_line_break() {
    assert_eq!(
        markdown_to_html("line one\nline two"),
        "<p>line one<br>line two</p>"
    );
}

#[test]
fn test_single_delimiter_pairs_become_emphasis() {
    assert_eq!(markdown_to_html("2 * 3 * 4"), "<p>2 <em> 3 </em> 4</p>");
    assert_eq!(markdown_to_html("a _ b _ c"), "<p>a <em> b </em> c</p>");
}

#[test]
fn test_unknown_syntax_passes_through() {
    assert_eq!(markdown_to_html("#### Deep"), "<p>#### Deep</p>");
    assert_eq!(markdown_to_html("~~struck~~"), "<p>~~struck~~</p>");
}
