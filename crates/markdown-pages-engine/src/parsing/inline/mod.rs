//! # Inline Parsing
//!
//! Turns the text of a single block into typed spans (plain, bold, italic,
//! code, link, image), then into leaf nodes of the HTML tree.
//!
//! ## Architecture
//!
//! Tokenizing is a fold of independent passes over a span list. Each pass
//! only looks at `Plain` spans and passes every other span through untouched,
//! so markup that was already extracted is never re-interpreted.
//!
//! Pass order is fixed: bold (`**`), italic (`_`), code (`` ` ``), images,
//! links.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`delimiter`**: `split_spans_delimiter()` for paired delimiters
//! - **`links`**: `split_spans_image()` / `split_spans_link()` pattern passes
//! - **`parser`**: `text_to_spans()` entry point and `span_to_node()`
//!
//! ## Errors
//!
//! An unbalanced delimiter is a hard error (`ConvertError::UnterminatedDelimiter`);
//! unmatched link or image syntax simply stays plain text.

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::{DelimitedKind, split_spans_delimiter};
pub use links::{extract_images, extract_links, split_spans_image, split_spans_link};
pub use parser::{span_to_node, text_to_nodes, text_to_spans};
pub use types::{SpanKind, TextSpan};
