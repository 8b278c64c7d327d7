use super::lines;

/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    /// Every line must start with `- `; a bare `-` fails the whole block.
    pub fn matches(block: &str) -> bool {
        lines(block).all(|line| line.starts_with(Self::MARKER))
    }

    pub fn strip_item(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// `1. item` lists, numbered consecutively from 1.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Line `n` (1-based) must start with `"{n}. "`.
    pub fn matches(block: &str) -> bool {
        lines(block)
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{}", i + 1, Self::SEPARATOR)))
    }

    /// Drops everything up to and including the first `". "`.
    pub fn strip_item(line: &str) -> Option<&str> {
        line.split_once(Self::SEPARATOR).map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_list() {
        assert!(UnorderedList::matches("- This is an\n- unordered list\n- with items"));
        assert!(!UnorderedList::matches("- This is a\n-malformed\n- unordered list"));
        assert_eq!(UnorderedList::strip_item("- one"), Some("one"));
        assert_eq!(UnorderedList::strip_item("-one"), None);
    }

    #[test]
    fn ordered_list_sequence() {
        assert!(OrderedList::matches("1. This is an\n2. ordered list\n3. with items"));
        assert!(!OrderedList::matches("1. a\n3. b"));
        assert!(!OrderedList::matches("2. starts late"));
        assert!(!OrderedList::matches("1. This is an\n2.improperly ordered\n3. list"));
    }

    #[test]
    fn ordered_list_past_nine() {
        let block = (1..=11)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(OrderedList::matches(&block));
    }

    #[test]
    fn ordered_strip_splits_on_first_separator() {
        assert_eq!(OrderedList::strip_item("12. a. b"), Some("a. b"));
        assert_eq!(OrderedList::strip_item("no separator"), None);
    }
}
