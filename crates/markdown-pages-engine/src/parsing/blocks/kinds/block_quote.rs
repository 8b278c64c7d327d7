use super::lines;

/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    /// Every line of a quote starts with this character. No space is required.
    pub const PREFIX: char = '>';

    /// The marker removed from quote text before inline parsing.
    pub const MARKER: &'static str = "> ";

    pub fn matches(block: &str) -> bool {
        lines(block).all(|line| line.starts_with(Self::PREFIX))
    }

    /// Removes every `"> "` in `text`, not only the leading ones.
    ///
    /// A `"> "` in the middle of a quoted sentence is dropped as well.
    pub fn strip_markers(text: &str) -> String {
        text.replace(Self::MARKER, "")
    }
}
