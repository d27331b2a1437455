use crate::error::{MarkdownError, Result};

/// The blank-line separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a markdown document into top-level blocks.
///
/// The whole input is trimmed first; the blocks themselves are returned
/// untrimmed, so a run of three newlines leaves a leading `\n` on the next
/// block.
///
/// # Errors
/// [`MarkdownError::EmptyDocument`] if the input is empty or whitespace only.
pub fn segment(markdown: &str) -> Result<Vec<&str>> {
    let text = markdown.trim();
    if text.is_empty() {
        return Err(MarkdownError::EmptyDocument);
    }
    Ok(text.split(BLOCK_SEPARATOR).collect())
}
