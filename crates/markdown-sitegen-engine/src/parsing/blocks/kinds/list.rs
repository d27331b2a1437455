use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MarkdownError, Result};

/// `- item` lists.
pub struct UnorderedList;

/// `1. item` lists, numbered `1..n` in either direction.
pub struct OrderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    pub fn is_item_line(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

impl OrderedList {
    pub const TAG: &'static str = "ol";

    fn regex() -> &'static Regex {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        ITEM_REGEX.get_or_init(|| Regex::new(r"^([0-9]+)\. ").expect("Invalid ordered list regex"))
    }

    /// The number of an item line, if `line` starts with `<digits>. `.
    ///
    /// A number too large for a `usize` saturates to `usize::MAX`; it can
    /// never be part of a `1..n` sequence, so such a block demotes to a
    /// paragraph.
    ///
    /// # Errors
    /// [`MarkdownError::MalformedListNumber`] if the matched prefix is not a
    /// decimal number at all.
    pub fn number(line: &str) -> Option<Result<usize>> {
        let digits = Self::regex().captures(line)?.get(1)?.as_str();
        Some(match digits.parse::<usize>() {
            Ok(n) => Ok(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
            Err(_) => Err(MarkdownError::MalformedListNumber(digits.to_string())),
        })
    }

    /// Item numbers of every item line in `block`, in order of appearance.
    pub fn numbers(block: &str) -> Result<Vec<usize>> {
        block.lines().filter_map(Self::number).collect()
    }

    /// Accepts exactly `1, 2, .., n` or `n, .., 2, 1`.
    pub fn is_valid_sequence(numbers: &[usize]) -> bool {
        let ascending = numbers.iter().enumerate().all(|(i, &n)| n == i + 1);
        let descending = numbers.iter().rev().enumerate().all(|(i, &n)| n == i + 1);
        !numbers.is_empty() && (ascending || descending)
    }

    pub fn strip_line(line: &str) -> &str {
        match Self::regex().find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
