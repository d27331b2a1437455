use std::sync::OnceLock;

use regex::Regex;

/// A `[label](url)` occurrence located in a text, with byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    /// Byte offset of the first character of the whole construct.
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
    pub label: &'a str,
    pub url: &'a str,
}

/// Image syntax: `![alt](url)`.
pub struct Image;

/// Link syntax: `[text](url)`, never directly after a `!`.
pub struct Link;

impl Image {
    pub const BANG: char = '!';

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([\s\S]+?)\]\(([\s\S]+?)\)").expect("Invalid image regex")
        })
    }

    /// All images in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| to_match(&caps))
            .collect()
    }
}

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([\s\S]+?)\]\(([\s\S]+?)\)").expect("Invalid link regex")
        })
    }

    /// All links in `text`, left to right.
    ///
    /// A candidate directly preceded by `!` is image syntax; the scan resumes
    /// one character after its `[` so a link nested inside can still match.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        let mut out = vec![];
        let mut pos = 0;
        while let Some(caps) = Self::regex().captures_at(text, pos) {
            let Some(m) = to_match(&caps) else {
                break;
            };
            if text[..m.start].ends_with(Image::BANG) {
                // `[` is one byte wide.
                pos = m.start + 1;
                continue;
            }
            pos = m.end;
            out.push(m);
        }
        out
    }
}

fn to_match<'a>(caps: &regex::Captures<'a>) -> Option<LinkMatch<'a>> {
    let whole = caps.get(0)?;
    Some(LinkMatch {
        start: whole.start(),
        end: whole.end(),
        label: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(ms: Vec<LinkMatch<'_>>) -> Vec<(&str, &str)> {
        ms.into_iter().map(|m| (m.label, m.url)).collect()
    }

    #[test]
    fn finds_links() {
        let found = Link::find_all(
            "This is text with an [link](https://link.com) and [link_1](https://link_1.com)",
        );
        assert_eq!(
            pairs(found),
            vec![("link", "https://link.com"), ("link_1", "https://link_1.com")]
        );
    }

    #[test]
    fn finds_images() {
        let found = Image::find_all(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and ![image 1](https://i.imgur.com/zjjcJKZJJ.png)",
        );
        assert_eq!(
            pairs(found),
            vec![
                ("image", "https://i.imgur.com/zjjcJKZ.png"),
                ("image 1", "https://i.imgur.com/zjjcJKZJJ.png")
            ]
        );
    }

    #[test]
    fn links_skip_image_syntax() {
        let found =
            Link::find_all("This is text with an ![link](https://link.com) and ![link_1](https://link_1.com)");
        assert!(found.is_empty());
    }

    #[test]
    fn images_require_bang() {
        let found = Image::find_all("This is text with an [image](https://i.imgur.com/zjjcJKZ.png)");
        assert!(found.is_empty());
    }

    #[test]
    fn offsets_cover_the_whole_construct() {
        let text = "see [here](u) now";
        let found = Link::find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "[here](u)");
    }

    #[test]
    fn empty_label_or_url_does_not_match() {
        assert!(Link::find_all("[](u) and [x]()").is_empty());
    }
}
