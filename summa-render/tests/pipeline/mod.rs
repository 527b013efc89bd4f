//! Pipeline tests
//!
//! End-to-end checks of `markdown_to_html` and the stage inspection helpers.

mod blocks;
mod inline;
mod properties;
mod stages;
