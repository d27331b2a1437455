use crate::error::{MarkdownError, Result};

use super::kinds::{CodeSpan, Emphasis};

/// The inline formatting of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Maps a delimiter (`**`, `_`, `` ` ``) to the kind it produces.
    pub fn from_delimiter(delimiter: &str) -> Result<Self> {
        match delimiter {
            Emphasis::BOLD => Ok(SpanKind::Bold),
            Emphasis::ITALIC => Ok(SpanKind::Italic),
            CodeSpan::TICK => Ok(SpanKind::Code),
            other => Err(MarkdownError::UnknownSpanType(other.to_string())),
        }
    }
}

/// One inline unit of text produced by the tokenizer.
///
/// `text` is the display text (alt text for images). `url` is only set for
/// links and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_map_to_kinds() {
        assert_eq!(SpanKind::from_delimiter("**"), Ok(SpanKind::Bold));
        assert_eq!(SpanKind::from_delimiter("_"), Ok(SpanKind::Italic));
        assert_eq!(SpanKind::from_delimiter("`"), Ok(SpanKind::Code));
    }

    #[test]
    fn unknown_delimiter_is_an_error() {
        assert_eq!(
            SpanKind::from_delimiter("~~"),
            Err(MarkdownError::UnknownSpanType("~~".into()))
        );
    }

    #[test]
    fn only_links_and_images_carry_urls() {
        assert_eq!(TextSpan::plain("a").url, None);
        assert_eq!(
            TextSpan::link("a", "https://boot.dev").url.as_deref(),
            Some("https://boot.dev")
        );
        assert_eq!(TextSpan::image("a", "u.png").kind, SpanKind::Image);
    }
}
