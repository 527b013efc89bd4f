//! Pipeline stages exposed by `summa inspect`
//!
//! Every pass of the Markdown pipeline can be inspected by name: the output is what the
//! pipeline holds right after that pass ran. Two extra stages sit around the passes:
//!
//! - `clean`: the payload after transport unescaping and trimming, before any pass.
//! - `--extra-stages-json`: instead of one stage, print every pass output as a JSON array of
//!   `{"pass": ..., "output": ...}` objects.
//!
//! The payload is cleaned before the passes run, the same way the `markdown` format does it,
//! so the last stage matches `summa render --from markdown` without display post-processing.
//!
//! Example: `summa inspect summary.md tables`

use std::collections::HashMap;
use summa_render::clean_summary_content;
use summa_render::pipeline::{render_stages, render_until};

/// Stage shown when none is given.
pub const DEFAULT_STAGE: &str = "paragraphs";

/// All stages accepted by `summa inspect`, in pipeline order
pub const AVAILABLE_STAGES: &[&str] = &[
    "clean",
    "unescape",
    "headers",
    "bold",
    "italic",
    "links",
    "images",
    "fenced-code",
    "inline-code",
    "tables",
    "rules",
    "unordered-lists",
    "ordered-lists",
    "blockquotes",
    "paragraphs",
];

/// Run the pipeline on `source` and return the output after `stage`.
///
/// Recognised extra parameters:
///
/// - `stages-json`: "true" prints all pass outputs as pretty JSON and ignores `stage`
pub fn execute_stage(
    source: &str,
    stage: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let cleaned = clean_summary_content(source);

    if wants_all_stages(extra_params)? {
        return serde_json::to_string_pretty(&render_stages(&cleaned))
            .map_err(|e| format!("JSON serialization failed: {e}"));
    }

    if stage == "clean" {
        return Ok(cleaned);
    }

    render_until(&cleaned, stage).ok_or_else(|| {
        format!(
            "Unknown stage '{stage}'. Available stages: {}",
            AVAILABLE_STAGES.join(", ")
        )
    })
}

fn wants_all_stages(extra_params: &HashMap<String, String>) -> Result<bool, String> {
    match extra_params.get("stages-json").map(String::as_str) {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(format!(
            "Invalid boolean value '{other}' for --extra-stages-json"
        )),
    }
}
