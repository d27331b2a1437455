use crate::error::Result;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block by its shape.
///
/// Checks run in fixed precedence and the first match wins: heading, code,
/// quote, unordered list, ordered list, paragraph. An ordered list whose
/// numbering is not `1..n` (either direction) demotes to a paragraph.
///
/// # Errors
/// [`crate::MarkdownError::MalformedListNumber`] if an item prefix matched by
/// the list pattern is not a number; item numbers too large for a `usize`
/// just demote the block.
pub fn classify(block: &str) -> Result<BlockType> {
    if Heading::level(block).is_some() {
        return Ok(BlockType::Heading);
    }
    if CodeFence::wraps(block) {
        return Ok(BlockType::Code);
    }
    if block.lines().any(BlockQuote::is_quote_line) {
        return Ok(BlockType::Quote);
    }
    if block.lines().any(UnorderedList::is_item_line) {
        return Ok(BlockType::UnorderedList);
    }

    let numbers = OrderedList::numbers(block)?;
    if numbers.is_empty() {
        return Ok(BlockType::Paragraph);
    }
    if OrderedList::is_valid_sequence(&numbers) {
        Ok(BlockType::OrderedList)
    } else {
        log::debug!("ordered list numbering {numbers:?} is not 1..n, treating block as paragraph");
        Ok(BlockType::Paragraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# heading", BlockType::Heading)]
    #[case("###### heading", BlockType::Heading)]
    #[case("####### too deep", BlockType::Paragraph)]
    #[case("#no space", BlockType::Paragraph)]
    #[case("```code here```", BlockType::Code)]
    #[case("```\nfn main() {}\n```", BlockType::Paragraph)]
    #[case("> quote\n> more quote", BlockType::Quote)]
    #[case("intro\n> quoted line", BlockType::Quote)]
    #[case("- one\n- two", BlockType::UnorderedList)]
    #[case("1. one\n2. two\n3. three", BlockType::OrderedList)]
    #[case("3. three\n2. two\n1. one", BlockType::OrderedList)]
    #[case("1. one\n3. three\n5. five", BlockType::Paragraph)]
    #[case("112. one\n2. two\n3. three", BlockType::Paragraph)]
    #[case("just some text", BlockType::Paragraph)]
    fn classifies_blocks(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), Ok(expected));
    }

    #[test]
    fn heading_beats_later_list_lines() {
        assert_eq!(classify("# Title\n- item"), Ok(BlockType::Heading));
    }

    #[test]
    fn quote_beats_list() {
        assert_eq!(classify("- item\n> quote"), Ok(BlockType::Quote));
    }

    #[test]
    fn classification_is_repeatable() {
        let block = "2. b\n1. a";
        assert_eq!(classify(block), classify(block));
    }

    #[test]
    fn overflowing_item_number_demotes_to_paragraph() {
        assert_eq!(
            classify("20231231235959123456789. was the build id"),
            Ok(BlockType::Paragraph)
        );
        assert_eq!(
            classify("1. a\n99999999999999999999999999. b"),
            Ok(BlockType::Paragraph)
        );
    }
}
