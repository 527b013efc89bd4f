//! Property tests for the pipeline.

use proptest::prelude::*;
use summa_render::{clean_summary_content, is_markdown, markdown_to_html};

proptest! {
    #[test]
    fn test_markdown_to_html_is_deterministic(input in "\\PC{0,200}") {
        prop_assert_eq!(markdown_to_html(&input), markdown_to_html(&input));
    }

    #[test]
    fn test_detection_never_panics(input in "[ -~\n]{0,200}") {
        let _ = is_markdown(&input);
        let _ = clean_summary_content(&input);
    }

    #[test]
    fn test_list_is_balanced_and_closed(count in 1usize..20) {
        let items: Vec<String> = (0..count).map(|i| format!("- item{i}")).collect();
        let source = format!("{}\ndone", items.join("\n"));

        let expected_items: String = (0..count).map(|i| format!("<li>item{i}</li>")).collect();
        prop_assert_eq!(
            markdown_to_html(&source),
            format!("<ul>{expected_items}</ul><p>done</p>")
        );
    }

    #[test]
    fn test_list_at_end_is_closed(count in 1usize..20) {
        let source: Vec<String> = (0..count).map(|i| format!("{}. step{i}", i + 1)).collect();
        let html = markdown_to_html(&source.join("\n"));

        prop_assert_eq!(html.matches("<ol>").count(), 1);
        prop_assert_eq!(html.matches("</ol>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), count);
        prop_assert!(html.ends_with("</ol>"));
    }

    #[test]
    fn test_clean_output_is_trimmed(input in "[ a-z\\\\n]{0,60}") {
        let cleaned = clean_summary_content(&input);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
