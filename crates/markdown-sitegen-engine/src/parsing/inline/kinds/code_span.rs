/// Code span inline type with owned delimiter constant.
///
/// Code spans are split out after bold and italic, so emphasis markers
/// inside backticks have already been consumed by then.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
