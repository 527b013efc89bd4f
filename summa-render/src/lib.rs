//! Rendering of AI-generated filing summaries
//!
//!     Summaries and comparison reports for primary and final filings arrive from the backend as
//!     loosely formatted text: usually Markdown, sometimes pre-rendered HTML, occasionally plain
//!     prose, and often still carrying the escaping of the JSON transport they came through. This
//!     crate turns that payload into an HTML fragment a document view can inject.
//!
//!     This is a pure lib: it powers summa-cli but is shell agnostic, so no code here should
//!     print, read env vars or touch the filesystem.
//!
//! Architecture
//!
//!     The center is a straight pipeline (./pipeline/mod.rs):
//!
//!         raw text → normalize → ordered block/inline passes → paragraph assembly
//!
//!     Every pass is a pure `&str -> String` function and the passes live in one ordered table,
//!     [`pipeline::PASSES`], that is folded over the input. The order is load bearing (bold must
//!     run before italic, fenced code before inline code, tables before paragraph assembly), so
//!     keeping it in a single table makes it visible and lets each stage be inspected on its own.
//!
//!     Around the pipeline sit the pieces a display surface needs:
//!     .
//!     ├── pipeline          # detector, normalizer, passes, table and list converters
//!     ├── display.rs        # style stripping, bare URL linkification, the summary display flow
//!     ├── document.rs       # standalone HTML page wrapper with embedded CSS
//!     ├── format.rs         # Format trait
//!     ├── registry.rs       # FormatRegistry for discovery and selection
//!     └── formats           # markdown, html, text and json payload inputs
//!
//! Failure Semantics
//!
//!     The three core functions ([`markdown_to_html`], [`is_markdown`],
//!     [`clean_summary_content`]) are total. Malformed Markdown degrades to partially converted
//!     or plain text and never produces an error. [`FormatError`] only exists for the registry
//!     surface (unknown formats, unusable payloads).
//!
//! Safety
//!
//!     Nothing in here sanitizes. Link targets are embedded verbatim and HTML input passes
//!     through. Callers that put the output in front of users must sanitize it themselves.

pub mod display;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod registry;
mod util;

pub use display::{prepare_summary, DisplayOptions};
pub use document::{default_css, wrap_in_document, DocumentOptions};
pub use error::FormatError;
pub use format::Format;
pub use pipeline::{
    clean_summary_content, detect_content_kind, is_markdown, markdown_to_html, ContentKind,
};
pub use registry::{FormatRegistry, RenderOptions};
