/// ATX heading (`# Title` .. `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<usize> {
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        let valid = (1..=Self::MAX_LEVEL).contains(&level) && block[level..].starts_with(' ');
        valid.then_some(level)
    }

    /// Splits a heading block into its level and the text after `#`×n and the space.
    pub fn strip(block: &str) -> Option<(usize, &str)> {
        let level = Self::level(block)?;
        Some((level, &block[level + 1..]))
    }

    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_levels_one_to_six() {
        assert_eq!(Heading::level("# Title"), Some(1));
        assert_eq!(Heading::level("###### Title"), Some(6));
    }

    #[test]
    fn rejects_seven_hashes_and_missing_space() {
        assert_eq!(Heading::level("####### Title"), None);
        assert_eq!(Heading::level("#Title"), None);
        assert_eq!(Heading::level("Title #"), None);
    }

    #[test]
    fn strips_marker_and_space() {
        assert_eq!(Heading::strip("### Sub heading"), Some((3, "Sub heading")));
        assert_eq!(Heading::tag(3), "h3");
    }
}
