/// A fenced code block that is literally wrapped in triple backticks.
///
/// Code content is a raw zone: it is never inline-tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the whole block is one line that starts and ends with a fence.
    ///
    /// The opening and closing fences must not overlap, so the block is at
    /// least six backticks long. A fence spanning several lines is not code;
    /// it falls through to the later checks.
    pub fn wraps(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && !block.contains('\n')
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Returns the verbatim content between the fences.
    pub fn strip(block: &str) -> &str {
        block
            .strip_prefix(Self::FENCE)
            .and_then(|b| b.strip_suffix(Self::FENCE))
            .unwrap_or(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_fence() {
        assert!(CodeFence::wraps("```code here```"));
        assert_eq!(CodeFence::strip("```code here```"), "code here");
    }

    #[test]
    fn strip_keeps_inner_text_verbatim() {
        assert_eq!(CodeFence::strip("``` two  spaces ```"), " two  spaces ");
        assert_eq!(CodeFence::strip("``````"), "");
    }

    #[test]
    fn multi_line_fence_is_not_code() {
        assert!(!CodeFence::wraps("```\nfn main() {}\n```"));
        assert!(!CodeFence::wraps("```a\nb```"));
    }

    #[test]
    fn open_fence_only_is_not_code() {
        assert!(!CodeFence::wraps("```rust\nfn main() {}"));
        assert!(!CodeFence::wraps("````"));
    }
}
