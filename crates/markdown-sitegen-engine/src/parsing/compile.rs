use crate::{
    error::{MarkdownError, Result},
    html::{Attributes, HtmlNode, IMG_TAG},
};

use super::{
    blocks::{
        BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::{SpanKind, TextSpan, tokenize},
    parse_document,
};

/// Tag of the root container wrapping a whole document.
pub const DOCUMENT_TAG: &str = "div";
pub const QUOTE_TAG: &str = "blockquote";
pub const LIST_ITEM_TAG: &str = "li";
/// Emitted before every `<li>` of a list.
pub const LIST_ITEM_INDENT: &str = "\n\t";

/// Converts one inline span to its leaf node.
pub fn span_to_leaf(span: &TextSpan) -> HtmlNode {
    let url = span.url.as_deref().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => HtmlNode::text(&span.text),
        SpanKind::Bold => HtmlNode::leaf("b", &span.text),
        SpanKind::Italic => HtmlNode::leaf("i", &span.text),
        SpanKind::Code => HtmlNode::leaf("code", &span.text),
        SpanKind::Image => HtmlNode::leaf_with(
            IMG_TAG,
            "",
            Attributes::new().with("src", url).with("alt", &span.text),
        ),
        SpanKind::Link => {
            HtmlNode::leaf_with("a", &span.text, Attributes::new().with("href", url))
        }
    }
}

/// Tokenizes `text` and maps every span to a leaf.
pub fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?.iter().map(span_to_leaf).collect())
}

/// # Errors
/// [`MarkdownError::Misclassified`] if `block` has no `#` marker.
pub fn compile_heading(block: &str) -> Result<HtmlNode> {
    let (level, text) =
        Heading::strip(block).ok_or(MarkdownError::Misclassified("heading"))?;
    Ok(HtmlNode::parent(Heading::tag(level), inline_children(text)?))
}

/// `<pre><code>…</code></pre>` with the content left untouched.
pub fn compile_code(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::leaf("code", CodeFence::strip(block))],
    ))
}

pub fn compile_quote(block: &str) -> Result<HtmlNode> {
    let text = BlockQuote::strip(block);
    Ok(HtmlNode::parent(QUOTE_TAG, inline_children(&text)?))
}

pub fn compile_unordered_list(block: &str) -> Result<HtmlNode> {
    compile_list(block, UnorderedList::TAG, UnorderedList::strip_line)
}

/// Items keep their source order, even when numbered downwards.
pub fn compile_ordered_list(block: &str) -> Result<HtmlNode> {
    compile_list(block, OrderedList::TAG, OrderedList::strip_line)
}

fn compile_list(block: &str, tag: &str, strip: fn(&str) -> &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Ok(HtmlNode::parent(LIST_ITEM_TAG, inline_children(strip(line))?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent_with_prefix(tag, LIST_ITEM_INDENT, items))
}

pub fn compile_paragraph(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent(Paragraph::TAG, inline_children(block)?))
}

/// Compiles a block already classified as `block_type`.
pub fn compile_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Heading => compile_heading(block),
        BlockType::Code => compile_code(block),
        BlockType::Quote => compile_quote(block),
        BlockType::UnorderedList => compile_unordered_list(block),
        BlockType::OrderedList => compile_ordered_list(block),
        BlockType::Paragraph => compile_paragraph(block),
    }
}

/// Compiles a whole markdown document into one `<div>` root node.
///
/// Blocks are compiled in source order; see [`parse_document`] for how the
/// document is split and classified.
///
/// # Errors
/// The first error of any stage: an empty document, an empty inline text
/// (e.g. a bare `# `), or a malformed ordered-list number.
pub fn compile_document(markdown: &str) -> Result<HtmlNode> {
    let children = parse_document(markdown)?
        .blocks
        .iter()
        .map(|b| compile_block(b.text, b.block_type))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(DOCUMENT_TAG, children))
}
