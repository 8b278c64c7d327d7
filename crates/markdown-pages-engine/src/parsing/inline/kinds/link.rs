use regex::Regex;
use std::sync::OnceLock;

/// `![alt](src)`. Alt text may be empty.
pub struct Image;

impl Image {
    pub const MARKER: &'static str = "!";

    /// Captures `(alt, src)`. Brackets in the alt text and parens in the
    /// source end the capture.
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }
}

/// `[text](href)`. Link text must be non-empty.
pub struct Link;

impl Link {
    /// Captures `(marker, text, href)`.
    ///
    /// `regex` has no lookbehind, so the optional leading `!` is captured
    /// instead and matches that carry it are skipped by the caller.
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"(!?)\[([^\[\]]+)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }
}
