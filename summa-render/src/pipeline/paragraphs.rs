//! Paragraph assembly
//!
//! The last pass. Blank lines separate paragraphs, single newlines inside a paragraph become
//! `<br>`, and runs of text that are not already block-level HTML are wrapped in `<p>`. Lines
//! produced by earlier passes as blocks (headers, tables, lists, rules, quotes, code) are
//! emitted as they are, so the result is a fragment of sibling blocks rather than blocks nested
//! inside a paragraph.

use super::split_lines;

const BLOCK_TAGS: &[&str] = &[
    "blockquote",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "thead",
    "tr",
    "ul",
];

/// Wraps loose text in paragraphs and joins everything into one fragment.
pub fn paragraphs(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    let mut paragraph: Vec<&str> = Vec::new();
    let mut lines = split_lines(input);

    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            continue;
        }
        if !is_block_line(trimmed) {
            paragraph.push(line);
            continue;
        }

        flush_paragraph(&mut out, &mut paragraph);
        out.push_str(trimmed);

        // Code blocks keep their own line breaks up to the closing tag.
        if trimmed.starts_with("<pre") && !trimmed.contains("</pre>") {
            for code_line in lines.by_ref() {
                out.push('\n');
                out.push_str(code_line);
                if code_line.contains("</pre>") {
                    break;
                }
            }
        }
    }

    flush_paragraph(&mut out, &mut paragraph);
    out
}

fn flush_paragraph(out: &mut String, paragraph: &mut Vec<&str>) {
    if paragraph.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&paragraph.join("<br>"));
    out.push_str("</p>");
    paragraph.clear();
}

/// True when the line opens or closes one of [`BLOCK_TAGS`].
fn is_block_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let name_len = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    let name = &rest[..name_len];
    BLOCK_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}
