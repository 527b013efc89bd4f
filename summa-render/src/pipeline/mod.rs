//! Markdown to HTML pipeline
//!
//! The conversion is a fold of [`PASSES`] over the input string. Each pass is a pure function;
//! the order of the table is the contract:
//!
//! | #  | Pass              | Must run before / after                                   |
//! |----|-------------------|-----------------------------------------------------------|
//! | 1  | `unescape`        | first, every other pass expects real newlines             |
//! | 2  | `headers`         | `###` before `##` before `#`                              |
//! | 3  | `bold`            | before `italic`, or `**` is read as two emphasis markers  |
//! | 4  | `italic`          |                                                           |
//! | 5  | `links`           | independent of `images` (the `!` prefix tells them apart) |
//! | 6  | `images`          |                                                           |
//! | 7  | `fenced-code`     | before `inline-code`                                      |
//! | 8  | `inline-code`     |                                                           |
//! | 9  | `tables`          | before `paragraphs`, it needs the line structure          |
//! | 10 | `rules`           |                                                           |
//! | 11 | `unordered-lists` | before `ordered-lists`                                    |
//! | 12 | `ordered-lists`   |                                                           |
//! | 13 | `blockquotes`     |                                                           |
//! | 14 | `paragraphs`      | last                                                      |
//!
//! The pipeline is not idempotent: feeding its output back in wraps and rewrites it again.
//! Apply it once per payload.

mod detect;
mod inline;
mod lists;
mod normalize;
mod paragraphs;
mod table;

pub use detect::{detect_content_kind, is_markdown, ContentKind};
pub use normalize::{clean_summary_content, unescape};
pub use table::tables;

use crate::util::html_escape;
use serde::Serialize;
use tracing::trace;

/// One named step of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The pipeline, in order.
pub const PASSES: &[Pass] = &[
    Pass {
        name: "unescape",
        apply: unescape,
    },
    Pass {
        name: "headers",
        apply: inline::headers,
    },
    Pass {
        name: "bold",
        apply: inline::bold,
    },
    Pass {
        name: "italic",
        apply: inline::italic,
    },
    Pass {
        name: "links",
        apply: inline::links,
    },
    Pass {
        name: "images",
        apply: inline::images,
    },
    Pass {
        name: "fenced-code",
        apply: inline::fenced_code,
    },
    Pass {
        name: "inline-code",
        apply: inline::inline_code,
    },
    Pass {
        name: "tables",
        apply: table::tables,
    },
    Pass {
        name: "rules",
        apply: inline::rules,
    },
    Pass {
        name: "unordered-lists",
        apply: lists::unordered_lists,
    },
    Pass {
        name: "ordered-lists",
        apply: lists::ordered_lists,
    },
    Pass {
        name: "blockquotes",
        apply: inline::blockquotes,
    },
    Pass {
        name: "paragraphs",
        apply: paragraphs::paragraphs,
    },
];

/// Output of a single pass, as recorded by [`render_stages`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub pass: &'static str,
    pub output: String,
}

/// Converts Markdown (raw or already cleaned) into an HTML fragment.
///
/// Never fails; empty input yields an empty string and anything the passes do not recognise
/// is carried through as text.
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    PASSES
        .iter()
        .fold(markdown.to_string(), |text, pass| apply_pass(pass, &text))
}

/// Runs the pipeline and keeps the output of every pass.
pub fn render_stages(markdown: &str) -> Vec<Stage> {
    let mut text = markdown.to_string();
    PASSES
        .iter()
        .map(|pass| {
            text = apply_pass(pass, &text);
            Stage {
                pass: pass.name,
                output: text.clone(),
            }
        })
        .collect()
}

/// Output of the pipeline stopped right after `pass`, or `None` for an unknown pass name.
pub fn render_until(markdown: &str, pass: &str) -> Option<String> {
    let end = PASSES.iter().position(|p| p.name == pass)?;
    Some(
        PASSES[..=end]
            .iter()
            .fold(markdown.to_string(), |text, pass| apply_pass(pass, &text)),
    )
}

/// Pass names in pipeline order.
pub fn pass_names() -> Vec<&'static str> {
    PASSES.iter().map(|pass| pass.name).collect()
}

/// Renders text that carries no markup: escaped, then split into paragraphs.
pub fn plain_text_to_html(text: &str) -> String {
    paragraphs::paragraphs(&html_escape(text))
}

/// Splits on `\n` and drops the `\r` of a CRLF ending. Unlike [`str::lines`], a trailing newline
/// still yields a final empty line, so joining with `\n` restores the layout.
pub(crate) fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn apply_pass(pass: &Pass, text: &str) -> String {
    let output = (pass.apply)(text);
    trace!(
        pass = pass.name,
        input_len = text.len(),
        output_len = output.len(),
        "applied pass"
    );
    output
}
