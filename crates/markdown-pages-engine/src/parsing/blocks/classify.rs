use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block. The first matching rule wins:
///
/// 1. code fence
/// 2. single-line heading
/// 3. quote
/// 4. unordered list
/// 5. ordered list
///
/// Anything else, including malformed versions of the above, is a paragraph.
pub fn classify_block(block: &str) -> BlockType {
    if CodeFence::matches(block) {
        BlockType::Code
    } else if let Some(level) = Heading::level(block) {
        BlockType::Heading(level)
    } else if BlockQuote::matches(block) {
        BlockType::Quote
    } else if UnorderedList::matches(block) {
        BlockType::UnorderedList
    } else if OrderedList::matches(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}
