/// Fenced code block: ``` at both ends of the block.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A block of just two fences (six characters) is not code.
    const MIN_LEN: usize = 2 * Self::FENCE.len();

    pub fn matches(block: &str) -> bool {
        block.chars().count() > Self::MIN_LEN
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Code between the fences, minus the character after the opening fence
    /// (normally the newline ending the fence line).
    ///
    /// `None` if `block` is not a fenced block.
    pub fn inner(block: &str) -> Option<&str> {
        if !Self::matches(block) {
            return None;
        }
        let between = &block[Self::FENCE.len()..block.len() - Self::FENCE.len()];
        let mut chars = between.chars();
        chars.next();
        Some(chars.as_str())
    }
}
