use crate::{
    error::ConvertError,
    html::HtmlNode,
    parsing::inline::text_to_nodes,
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList, lines},
    types::BlockType,
};

/// Compiles one classified block into a single parent node.
///
/// # Errors
/// - [`ConvertError::UnterminatedDelimiter`] from inline parsing
/// - [`ConvertError::InternalInvariant`] when `block` does not have the shape
///   `block_type` promises (only possible when the pair did not come from
///   [`classify_block`](super::classify_block))
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ConvertError> {
    match block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading(level) => heading_to_node(block, level),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => list_to_node(block, "ul", UnorderedList::strip_item),
        BlockType::OrderedList => list_to_node(block, "ol", OrderedList::strip_item),
    }
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = Paragraph::collapse_whitespace(block);
    Ok(HtmlNode::parent("p", text_to_nodes(&text)?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    if !(1..=Heading::MAX_LEVEL).contains(&level) {
        return Err(ConvertError::InternalInvariant(format!(
            "heading level {level} is outside 1..={}",
            Heading::MAX_LEVEL
        )));
    }

    let text = Paragraph::collapse_whitespace(block);
    let (markers, title) = Heading::strip(&text);
    if markers != usize::from(level) {
        return Err(ConvertError::InternalInvariant(format!(
            "heading level {level} does not match {markers} '{}' markers",
            Heading::MARKER
        )));
    }

    Ok(HtmlNode::parent(format!("h{level}"), text_to_nodes(title)?))
}

fn code_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let code = CodeFence::inner(block).ok_or_else(|| {
        ConvertError::InternalInvariant("code block is not fenced with ```".to_string())
    })?;

    // Raw zone: the code is one untagged leaf, never tokenized.
    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent("code", vec![HtmlNode::text(code)])],
    ))
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = BlockQuote::strip_markers(&Paragraph::collapse_whitespace(block));
    Ok(HtmlNode::parent("blockquote", text_to_nodes(&text)?))
}

fn list_to_node(
    block: &str,
    tag: &str,
    strip_item: fn(&str) -> Option<&str>,
) -> Result<HtmlNode, ConvertError> {
    let items = lines(block)
        .map(|line| -> Result<HtmlNode, ConvertError> {
            let item = strip_item(line).ok_or_else(|| {
                ConvertError::InternalInvariant(format!("<{tag}> line without marker: {line:?}"))
            })?;
            Ok(HtmlNode::parent("li", text_to_nodes(item)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(tag, items))
}
