//! # Block Parsing
//!
//! Three-phase block parsing over blank-line separated blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on `\n\n`, each
//!    block is trimmed, and empty blocks are dropped
//!
//! 2. **Classification** (`classify`): each block gets a `BlockType` from
//!    positional rules, tried in a fixed precedence order
//!
//! 3. **Compilation** (`compile`): markers are stripped and the remaining text
//!    goes through inline parsing, producing one parent node per block
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, BlockQuote, lists, Paragraph)
//! - **`segment`**: `segment_blocks()`
//! - **`classify`**: `classify_block()`
//! - **`compile`**: `block_to_node()`
//!
//! ## Key Invariants
//!
//! - Classification is total: anything malformed falls back to `Paragraph`
//! - Code blocks are raw zones: no inline parsing inside
//! - Lists are flat; there is no item nesting

pub mod classify;
pub mod compile;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify_block;
pub use compile::block_to_node;
pub use segment::{segment_blocks, segment_blocks_bytes};
pub use types::BlockType;
