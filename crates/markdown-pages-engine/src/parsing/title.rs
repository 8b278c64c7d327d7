use crate::error::ConvertError;

use super::{blocks::segment::BLOCK_SEPARATOR, normalize_line_endings};

/// Prefix marking the title heading.
pub const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first block that starts with `"# "`.
///
/// Sections are split on blank lines like [`segment_blocks`](super::blocks::segment_blocks),
/// but only leading whitespace is removed before the check so that a lone
/// `"# "` still counts and yields an empty title. Trailing whitespace is
/// removed from the result. `## Sub` headings are skipped.
///
/// # Errors
/// [`ConvertError::TitleNotFound`] when no block starts with `"# "`.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    let markdown = normalize_line_endings(markdown);
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim_start)
        .find_map(|section| section.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim_end().to_string())
        .ok_or(ConvertError::TitleNotFound)
}
