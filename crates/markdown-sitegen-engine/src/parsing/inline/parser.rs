use crate::error::{MarkdownError, Result};

use super::{
    kinds::{CodeSpan, Emphasis, Image, Link, LinkMatch},
    types::{SpanKind, TextSpan},
};

/// Delimiters in the order they are split out. Bold runs before italic, so
/// underscores inside a bold span stay literal.
pub const DELIMITERS: [&str; 3] = [Emphasis::BOLD, Emphasis::ITALIC, CodeSpan::TICK];

/// Tokenizes inline markdown into a flat sequence of [`TextSpan`]s.
///
/// Stages run in a fixed order and each only touches spans still `Plain`:
/// bold, italic, code, then images, then links.
///
/// # Errors
/// [`MarkdownError::EmptyInput`] if `text` is empty. Unbalanced delimiters
/// are not errors; they stay literal text.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    if text.is_empty() {
        return Err(MarkdownError::EmptyInput);
    }

    let mut spans = vec![TextSpan::plain(text)];
    for delimiter in DELIMITERS {
        spans = split_delimiter(spans, delimiter)?;
    }
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Splits every plain span on `delimiter`.
///
/// Odd-indexed pieces take the delimiter's kind. An even piece count means
/// the delimiter is unterminated, and the span is kept unchanged.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str) -> Result<Vec<TextSpan>> {
    let styled = SpanKind::from_delimiter(delimiter)?;
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.text.contains(delimiter) {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            out.push(span);
            continue;
        }

        out.extend(
            pieces
                .into_iter()
                .enumerate()
                .filter(|(_, piece)| !piece.is_empty())
                .map(|(i, piece)| {
                    let kind = if i % 2 == 0 { SpanKind::Plain } else { styled };
                    TextSpan::new(kind, piece)
                }),
        );
    }

    Ok(out)
}

/// Pulls `![alt](url)` images out of plain spans.
///
/// # Errors
/// [`MarkdownError::EmptyInput`] when handed no spans at all.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_with(spans, Image::find_all, |alt, url| TextSpan::image(alt, url))
}

/// Pulls `[text](url)` links out of plain spans.
///
/// # Errors
/// [`MarkdownError::EmptyInput`] when handed no spans at all.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_with(spans, Link::find_all, |text, url| TextSpan::link(text, url))
}

fn split_with(
    spans: Vec<TextSpan>,
    find: fn(&str) -> Vec<LinkMatch<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Result<Vec<TextSpan>> {
    if spans.is_empty() {
        return Err(MarkdownError::EmptyInput);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = find(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = 0;
        for m in matches {
            if m.start > rest {
                out.push(TextSpan::plain(&span.text[rest..m.start]));
            }
            out.push(make(m.label, m.url));
            rest = m.end;
        }
        if rest < span.text.len() {
            out.push(TextSpan::plain(&span.text[rest..]));
        }
    }

    Ok(out)
}
