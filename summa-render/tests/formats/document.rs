use once_cell::sync::Lazy;
use regex::Regex;
use summa_render::{default_css, wrap_in_document, DocumentOptions};

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*?>.*?</style>").unwrap());

#[test]
fn test_document_embeds_baseline_css() {
    let html = wrap_in_document("<p>x</p>", &DocumentOptions::default());
    let style = STYLE_BLOCK.find(&html).unwrap().as_str();
    assert!(style.contains(default_css()));
}

#[test]
fn test_document_structure_without_styles() {
    let html = wrap_in_document("<p>x</p>", &DocumentOptions::new("Report"));
    let stripped = STYLE_BLOCK.replace_all(&html, "");

    assert_eq!(STYLE_BLOCK.find_iter(&html).count(), 1);
    assert!(stripped.contains("<meta name=\"generator\" content=\"summa-render\">"));
    assert!(stripped.contains("<title>Report</title>"));
    assert!(stripped.ends_with("<p>x</p>\n</div>\n</body>\n</html>"));
}

#[test]
fn test_baseline_css_styles_tables() {
    assert!(default_css().contains(".markdown-table"));
}
