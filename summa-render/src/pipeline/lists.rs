//! List conversion
//!
//! Lists are recognised line by line with a two-state machine. Unordered and ordered lists are
//! two independent passes over the whole text; the ordered pass sees the `<ul>` markup from the
//! unordered pass as ordinary lines that never match its item pattern.
//!
//! A converted list is emitted on a single line so paragraph assembly treats it as one block.

use super::split_lines;
use once_cell::sync::Lazy;
use regex::Regex;

static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s(.+)$").expect("valid unordered item pattern"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s(.+)$").expect("valid ordered item pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

/// `-`, `*` or `+` items into `<ul>`.
pub fn unordered_lists(input: &str) -> String {
    convert_lists(input, &UNORDERED_ITEM, "ul")
}

/// `1.` style items into `<ol>`.
pub fn ordered_lists(input: &str) -> String {
    convert_lists(input, &ORDERED_ITEM, "ol")
}

fn convert_lists(input: &str, item: &Regex, tag: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut list = String::new();
    let mut state = ListState::Outside;

    for line in split_lines(input) {
        let text = item
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        state = match (state, text) {
            (ListState::Outside, Some(text)) => {
                list.push('<');
                list.push_str(tag);
                list.push('>');
                push_item(&mut list, text);
                ListState::Inside
            }
            (ListState::Inside, Some(text)) => {
                push_item(&mut list, text);
                ListState::Inside
            }
            (ListState::Inside, None) => {
                out.push(close_list(&mut list, tag));
                out.push(line.to_string());
                ListState::Outside
            }
            (ListState::Outside, None) => {
                out.push(line.to_string());
                ListState::Outside
            }
        };
    }

    // End of input is a transition too: an open list still needs its closing tag.
    if state == ListState::Inside {
        out.push(close_list(&mut list, tag));
    }

    out.join("\n")
}

fn push_item(list: &mut String, text: &str) {
    list.push_str("<li>");
    list.push_str(text);
    list.push_str("</li>");
}

fn close_list(list: &mut String, tag: &str) -> String {
    list.push_str("</");
    list.push_str(tag);
    list.push('>');
    std::mem::take(list)
}
