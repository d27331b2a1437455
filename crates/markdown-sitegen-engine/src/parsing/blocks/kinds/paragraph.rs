/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the fallback when no other block
/// shape matches, including ordered lists with broken numbering. The whole
/// block, newlines included, is inline-tokenized.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
