/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// The default when no other rule matches.
    Paragraph,
    /// A single-line `#`..`######` heading.
    Heading(u8),
    /// A block fenced with ``` on both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines start with `1. `, `2. `, ... in order.
    OrderedList,
}
