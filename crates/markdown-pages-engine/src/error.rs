/// Errors raised while converting markdown into an HTML node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The document bytes were not text.
    #[error("markdown input is not valid UTF-8: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),
    /// A bold, italic or code delimiter was opened but never closed.
    #[error("unterminated '{delimiter}' delimiter detected")]
    UnterminatedDelimiter { delimiter: &'static str },
    /// A block reached the compiler with a type that does not fit its text.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
    /// The document has no `# ` heading block to take a title from.
    #[error("markdown does not contain a title heading")]
    TitleNotFound,
}
