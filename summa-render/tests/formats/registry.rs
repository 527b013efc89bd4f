use summa_render::{DisplayOptions, DocumentOptions, FormatError, FormatRegistry, RenderOptions};

#[test]
fn test_default_formats_are_registered() {
    let registry = FormatRegistry::default();
    for name in ["markdown", "html", "text", "json"] {
        assert!(registry.has(name), "missing format {name}");
    }
}

#[test]
fn test_markdown_format_cleans_before_rendering() {
    let registry = FormatRegistry::default();
    let html = registry
        .render("  # Title\\n\\nBody  ", "markdown")
        .unwrap();
    assert_eq!(html, "<h1>Title</h1><p>Body</p>");
}

#[test]
fn test_text_format_never_interprets_markdown() {
    let registry = FormatRegistry::default();
    let html = registry.render("**not bold**", "text").unwrap();
    assert_eq!(html, "<p>**not bold**</p>");
}

#[test]
fn test_json_format_with_field_parameter() {
    let registry = FormatRegistry::default();
    let mut options = RenderOptions::default();
    options
        .extra
        .insert("field".to_string(), "comparison".to_string());

    let html = registry
        .render_with_options(
            r#"{"comparison": "- Added risk factor\n- Dropped guidance"}"#,
            "json",
            &options,
        )
        .unwrap();
    assert_eq!(
        html,
        "<ul><li>Added risk factor</li><li>Dropped guidance</li></ul>"
    );
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let err = registry.render("x", "rtf").unwrap_err();
    assert_eq!(err, FormatError::FormatNotFound("rtf".to_string()));
    assert_eq!(err.to_string(), "Format 'rtf' not found");
}

#[test]
fn test_markdown_rejects_parameters() {
    let registry = FormatRegistry::default();
    let mut options = RenderOptions::default();
    options.extra.insert("theme".to_string(), "dark".to_string());

    let err = registry
        .render_with_options("# x", "markdown", &options)
        .unwrap_err();
    assert!(err.to_string().contains("theme"));
}

#[test]
fn test_render_auto_picks_by_content() {
    let registry = FormatRegistry::default();
    let options = RenderOptions {
        display: DisplayOptions::none(),
        ..Default::default()
    };

    assert_eq!(
        registry.render_auto("- one\\n- two", &options).unwrap(),
        "<ul><li>one</li><li>two</li></ul>"
    );
    assert_eq!(
        registry.render_auto("<p>ready</p>", &options).unwrap(),
        "<p>ready</p>"
    );
    assert_eq!(
        registry.render_auto("a < b", &options).unwrap(),
        "<p>a &lt; b</p>"
    );
}

#[test]
fn test_standalone_output() {
    let registry = FormatRegistry::default();
    let options = RenderOptions {
        document: Some(DocumentOptions::new("Q3 Filing")),
        ..Default::default()
    };
    let html = registry
        .render_with_options("## Overview", "markdown", &options)
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Q3 Filing</title>"));
    assert!(html.contains("<div class=\"summa-document\">\n<h2>Overview</h2>\n</div>"));
}

#[test]
fn test_detect_from_filename_is_case_sensitive_on_extension() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("summary.markdown"),
        Some("markdown".to_string())
    );
    assert_eq!(registry.detect_format_from_filename("SUMMARY.MD"), None);
}
