pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Heading level of a single-line block such as `## Title`.
    ///
    /// The first space-separated word must be 1..=6 `#` characters and at
    /// least one more word must follow. Multi-line blocks never qualify.
    pub fn level(block: &str) -> Option<u8> {
        if block.contains('\n') {
            return None;
        }
        let mut words = block.split(' ');
        let first = words.next()?;
        words.next()?;

        let count = first.len();
        let all_markers = first.chars().all(|c| c == Self::MARKER);
        if all_markers && (1..=usize::from(Self::MAX_LEVEL)).contains(&count) {
            u8::try_from(count).ok()
        } else {
            None
        }
    }

    /// Splits `# Title` into the marker count and the text after the marker
    /// run and one space.
    pub fn strip(text: &str) -> (usize, &str) {
        let rest = text.trim_start_matches(Self::MARKER);
        let count = text.len() - rest.len();
        (count, rest.strip_prefix(' ').unwrap_or(rest))
    }
}
