/// The shape of a top-level markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#`..`######` followed by a space.
    Heading,
    /// A block wrapped in triple backticks.
    Code,
    /// At least one line starting with `> `.
    Quote,
    /// At least one line starting with `- `.
    UnorderedList,
    /// `1. `-style lines numbered `1..n` ascending or descending.
    OrderedList,
    /// Fallback when nothing else matches.
    Paragraph,
}
