use crate::error::ConvertError;

use super::{
    kinds::{CodeSpan, Emphasis},
    types::TextSpan,
};

/// Span types produced by splitting on a paired delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedKind {
    Bold,
    Italic,
    Code,
}

impl DelimitedKind {
    /// Pass order used by the tokenizer.
    pub const PASS_ORDER: [DelimitedKind; 3] =
        [DelimitedKind::Bold, DelimitedKind::Italic, DelimitedKind::Code];

    pub fn delimiter(self) -> &'static str {
        match self {
            DelimitedKind::Bold => Emphasis::BOLD,
            DelimitedKind::Italic => Emphasis::ITALIC,
            DelimitedKind::Code => CodeSpan::TICK,
        }
    }

    fn span(self, text: &str) -> TextSpan {
        let text = text.to_string();
        match self {
            DelimitedKind::Bold => TextSpan::Bold(text),
            DelimitedKind::Italic => TextSpan::Italic(text),
            DelimitedKind::Code => TextSpan::Code(text),
        }
    }
}

/// Splits every `Plain` span on `kind`'s delimiter.
///
/// Pieces alternate plain / delimited / plain, so a balanced split always has
/// an odd number of pieces. An even count means a delimiter was left open.
/// Empty pieces are dropped. Spans that contain no delimiter, and spans that
/// are not `Plain`, are passed through unchanged.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    kind: DelimitedKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let delimiter = kind.delimiter();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) if text.contains(delimiter) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let pieces: Vec<&str> = text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ConvertError::UnterminatedDelimiter { delimiter });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(piece));
            } else {
                out.push(kind.span(piece));
            }
        }
    }

    Ok(out)
}
