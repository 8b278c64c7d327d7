/// Code span inline type with owned delimiter constant.
///
/// The code pass runs after bold and italic, so `_` inside backticks is
/// still seen by the italic pass.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
