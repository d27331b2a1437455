pub mod blocks;
pub mod compile;
pub mod inline;

use crate::error::Result;

use blocks::{BlockType, classify, segment};

/// A top-level block with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock<'a> {
    pub block_type: BlockType,
    /// Block text with surrounding newlines stripped.
    pub text: &'a str,
}

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<ParsedBlock<'a>>,
}

/// Segments and classifies a document without compiling it.
///
/// Blocks that are blank once their surrounding newlines are stripped (left
/// behind by runs of blank or whitespace-only lines) are dropped.
pub fn parse_document(markdown: &str) -> Result<ParsedDoc<'_>> {
    let mut blocks = vec![];
    for raw in segment(markdown)? {
        let text = raw.trim_matches('\n');
        if text.trim().is_empty() {
            continue;
        }
        let block_type = classify(text)?;
        log::trace!("classified {block_type:?} block ({} bytes)", text.len());
        blocks.push(ParsedBlock { block_type, text });
    }
    Ok(ParsedDoc { blocks })
}
