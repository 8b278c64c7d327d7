pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::{error::ConvertError, html::HtmlNode};

use blocks::{block_to_node, classify_block, segment_blocks};

pub use title::extract_title;

/// Root container every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// Converts a markdown document into an HTML tree rooted at a `div`.
///
/// Blocks appear in source order. Malformed block syntax degrades to a
/// paragraph; malformed inline delimiters abort the whole conversion.
///
/// # Errors
/// [`ConvertError::UnterminatedDelimiter`] when any block has an unbalanced `**`, `_` or `` ` ``.
pub fn parse_document(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let markdown = normalize_line_endings(markdown);
    let blocks = segment_blocks(&markdown);
    log::debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(|block| {
            let block_type = classify_block(block);
            log::trace!("classified block as {block_type:?}");
            block_to_node(block, block_type)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Byte-level variant of [`parse_document`].
///
/// # Errors
/// [`ConvertError::InvalidInput`] when `bytes` is not UTF-8, plus everything
/// [`parse_document`] can return.
pub fn parse_document_bytes(bytes: &[u8]) -> Result<HtmlNode, ConvertError> {
    parse_document(std::str::from_utf8(bytes)?)
}

/// Rewrites `\r\n` to `\n` so blank-line splitting sees Windows files the same way.
pub(crate) fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
