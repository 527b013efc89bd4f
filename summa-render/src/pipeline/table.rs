//! Pipe table conversion
//!
//! A table is a run of at least two consecutive lines that contain a `|`. The first line is the
//! header, the second is taken to be the `---|---` separator and dropped without being looked
//! at, and the rest are body rows. A run of one line is not a table and is left as it is.
//!
//! Cells come from splitting on `|` and dropping blank pieces, which is what makes leading and
//! trailing pipes optional. Body rows that end up with no cells are skipped.

use super::split_lines;

const TABLE_CLASS: &str = "markdown-table";

/// Replaces every qualifying line run with a `<table>` on a single line.
pub fn tables(input: &str) -> String {
    let lines: Vec<&str> = split_lines(input).collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while idx < lines.len() {
        let run = lines[idx..]
            .iter()
            .take_while(|line| is_table_line(line))
            .count();

        if run >= 2 {
            out.push(render_table(&lines[idx..idx + run]));
            idx += run;
        } else {
            out.push(lines[idx].to_string());
            idx += 1;
        }
    }

    out.join("\n")
}

fn is_table_line(line: &str) -> bool {
    line.contains('|')
}

fn split_cells(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn render_table(rows: &[&str]) -> String {
    let mut html = format!(r#"<table class="{TABLE_CLASS}"><thead><tr>"#);
    for cell in split_cells(rows[0]) {
        html.push_str("<th>");
        html.push_str(cell);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead>");

    let body: Vec<Vec<&str>> = rows
        .iter()
        .skip(2)
        .map(|row| split_cells(row))
        .filter(|cells| !cells.is_empty())
        .collect();

    if !body.is_empty() {
        html.push_str("<tbody>");
        for cells in body {
            html.push_str("<tr>");
            for cell in cells {
                html.push_str("<td>");
                html.push_str(cell);
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
    }

    html.push_str("</table>");
    html
}
