use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MarkdownError, Result};

fn title_regex() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| Regex::new(r"(?m)^# (.*)$").expect("Invalid title regex"))
}

/// Returns the text of the first `# ` heading line anywhere in `markdown`.
///
/// Trailing whitespace (including a `\r`) is trimmed. Headings with no text
/// are skipped.
///
/// # Errors
/// [`MarkdownError::NoTitle`] if the document has no level-1 heading.
pub fn extract_title(markdown: &str) -> Result<String> {
    title_regex()
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(MarkdownError::NoTitle)
}
