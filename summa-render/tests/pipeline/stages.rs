//! Stage inspection helpers.

use summa_render::markdown_to_html;
use summa_render::pipeline::{pass_names, render_stages, render_until, PASSES};

#[test]
fn test_every_pass_produces_a_stage() {
    let stages = render_stages("# Title\\n\\n**b**");
    let names: Vec<&str> = stages.iter().map(|stage| stage.pass).collect();
    assert_eq!(names, pass_names());
    assert_eq!(stages.len(), PASSES.len());
}

#[test]
fn test_last_stage_matches_full_render() {
    let source = "## Risks\\n\\n| A | B |\\n|---|---|\\n| 1 | 2 |";
    let stages = render_stages(source);
    assert_eq!(
        stages.last().map(|stage| stage.output.as_str()),
        Some(markdown_to_html(source).as_str())
    );
}

#[test]
fn test_render_until_tables_keeps_line_structure() {
    let html = render_until("text\n| A |\n|---|", "tables").unwrap();
    assert_eq!(
        html,
        "text\n<table class=\"markdown-table\"><thead><tr><th>A</th></tr></thead></table>"
    );
}

#[test]
fn test_render_until_unknown_pass() {
    assert!(render_until("text", "smartypants").is_none());
}

#[test]
fn test_stage_serializes_to_json() {
    let stages = render_stages("x");
    let json = serde_json::to_value(&stages[0]).unwrap();
    assert_eq!(json["pass"], "unescape");
    assert_eq!(json["output"], "x");
}
