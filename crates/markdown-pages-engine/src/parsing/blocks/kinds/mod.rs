//! Block types with owned delimiters.
//!
//! All block-level syntax knowledge lives here: the classifier asks
//! `matches`/`level`, the compiler asks `strip*`/`inner`. Neither hardcodes
//! a marker.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;

/// Lines of a block. Blocks are already `\n`-normalized and trimmed.
pub(crate) fn lines(block: &str) -> impl Iterator<Item = &str> {
    block.split('\n')
}
