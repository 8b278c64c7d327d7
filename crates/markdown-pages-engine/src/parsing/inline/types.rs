/// The kind of an inline span, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text.
///
/// Links and images always carry a destination; the other variants never do.
/// Spans are values: passes build new spans instead of editing old ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    /// `[text](destination)`
    Link { text: String, destination: String },
    /// `![alt](destination)`
    Image { text: String, destination: String },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, destination: impl Into<String>) -> Self {
        TextSpan::Link {
            text: text.into(),
            destination: destination.into(),
        }
    }

    pub fn image(text: impl Into<String>, destination: impl Into<String>) -> Self {
        TextSpan::Image {
            text: text.into(),
            destination: destination.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. }
            | TextSpan::Image { text, .. } => text,
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            TextSpan::Link { destination, .. } | TextSpan::Image { destination, .. } => {
                Some(destination)
            }
            _ => None,
        }
    }
}
