/// Errors raised while compiling markdown or rendering the resulting HTML tree.
///
/// Every variant is terminal for the conversion that produced it: there is no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("No text passed for inline parsing")]
    EmptyInput,
    #[error("Markdown document is empty")]
    EmptyDocument,
    #[error("Invalid HTML: no value provided for leaf node <{}>", .tag.as_deref().unwrap_or("text"))]
    InvalidLeaf { tag: Option<String> },
    #[error("Invalid HTML: {reason}")]
    InvalidParent { reason: &'static str },
    #[error("Unknown inline span delimiter: {0:?}")]
    UnknownSpanType(String),
    #[error("Illegal ordered list number: {0:?}")]
    MalformedListNumber(String),
    #[error("Block does not have the shape of a {0}")]
    Misclassified(&'static str),
    #[error("No title found")]
    NoTitle,
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
