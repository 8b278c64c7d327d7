/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Line breaks inside a paragraph become single spaces.
pub struct Paragraph;

impl Paragraph {
    /// Collapses every whitespace run, line breaks included, to one space.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
