use crate::{error::ConvertError, html::HtmlNode};

use super::{
    delimiter::{DelimitedKind, split_spans_delimiter},
    links::{split_spans_image, split_spans_link},
    types::TextSpan,
};

/// Tokenizes block text into [`TextSpan`]s.
///
/// Starts from a single `Plain` span and folds it through the delimiter
/// passes (bold, italic, code), then the image and link passes. Text without
/// any markup comes back as one `Plain` span, including the empty string.
///
/// # Errors
/// [`ConvertError::UnterminatedDelimiter`] when a `**`, `_` or `` ` `` is left open.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let spans = DelimitedKind::PASS_ORDER
        .into_iter()
        .try_fold(vec![TextSpan::plain(text)], split_spans_delimiter)?;
    let spans = split_spans_link(split_spans_image(spans));

    log::trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Converts one span into a leaf node.
///
/// Images become an empty `img` leaf carrying `src` then `alt`.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    match span {
        TextSpan::Plain(text) => HtmlNode::text(text),
        TextSpan::Bold(text) => HtmlNode::leaf("b", text),
        TextSpan::Italic(text) => HtmlNode::leaf("i", text),
        TextSpan::Code(text) => HtmlNode::leaf("code", text),
        TextSpan::Link { text, destination } => {
            HtmlNode::leaf("a", text).with_attribute("href", destination)
        }
        TextSpan::Image { text, destination } => HtmlNode::leaf("img", "")
            .with_attribute("src", destination)
            .with_attribute("alt", text),
    }
}

/// Tokenizes `text` and converts every span into a leaf node.
pub fn text_to_nodes(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?.into_iter().map(span_to_node).collect())
}
