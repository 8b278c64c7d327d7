use crate::error::ConvertError;

/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks in source order.
///
/// Line breaks inside a block are kept. An empty document yields no blocks.
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Byte-level variant of [`segment_blocks`].
///
/// # Errors
/// [`ConvertError::InvalidInput`] when `bytes` is not UTF-8 text.
pub fn segment_blocks_bytes(bytes: &[u8]) -> Result<Vec<&str>, ConvertError> {
    Ok(segment_blocks(std::str::from_utf8(bytes)?))
}
