//! Format implementations
//!
//! Each format turns one kind of summary payload into an HTML fragment.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
