//! Markdown to HTML compiler for a flat markdown dialect.
//!
//! The pipeline is pure: no I/O, no shared state. Each call builds its own
//! node tree.
//!
//! ```
//! let html = markdown_sitegen_engine::markdown_to_html("# Title\n\nbody text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>body text</p></div>");
//! ```

pub mod error;
pub mod html;
pub mod parsing;
pub mod title;

pub use error::{MarkdownError, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, render};
pub use parsing::{
    ParsedBlock, ParsedDoc,
    blocks::{BlockType, classify, segment},
    compile::compile_document,
    inline::{SpanKind, TextSpan, tokenize},
    parse_document,
};
pub use title::extract_title;

/// Compiles markdown into the root `<div>` node of the document.
pub fn compile_markdown_to_html(markdown: &str) -> Result<HtmlNode> {
    compile_document(markdown)
}

/// Compiles markdown and serializes the resulting tree.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    compile_document(markdown)?.to_html()
}
