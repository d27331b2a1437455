/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix, including its space.
    pub const PREFIX: &'static str = "> ";
    /// A line holding only the marker is an empty quote line.
    pub const MARKER: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips `> ` (or a bare `>` on an otherwise empty line) from one line.
    pub fn strip_line(line: &str) -> &str {
        if let Some(rest) = line.strip_prefix(Self::PREFIX) {
            return rest;
        }
        if line.trim_end().strip_prefix(Self::MARKER) == Some("") {
            return "";
        }
        line
    }

    /// Strips the prefix from every line and joins the lines with `\n`.
    pub fn strip(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_line() {
        assert_eq!(
            BlockQuote::strip("> first line\n> second line"),
            "first line\nsecond line"
        );
    }

    #[test]
    fn bare_marker_line_becomes_empty() {
        assert_eq!(BlockQuote::strip("> a\n>\n> b"), "a\n\nb");
        assert_eq!(BlockQuote::strip_line(">  "), "");
        assert_eq!(BlockQuote::strip_line(">>"), ">>");
    }

    #[test]
    fn unprefixed_lines_are_kept() {
        assert_eq!(BlockQuote::strip("> a\nlazy"), "a\nlazy");
    }

    #[test]
    fn marker_without_space_is_not_a_quote_line() {
        assert!(BlockQuote::is_quote_line("> x"));
        assert!(!BlockQuote::is_quote_line(">x"));
    }
}
