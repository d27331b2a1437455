//! # Block Parsing
//!
//! Two steps, both pure functions of the input text.
//!
//! 1. **Segmentation** (`segment`): the trimmed document is split on blank
//!    lines (`\n\n`) into top-level blocks
//! 2. **Classification** (`classify`): each block gets exactly one
//!    [`BlockType`] by shape, in fixed precedence
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types owning their markers (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `segment()`
//! - **`classify`**: `classify()`
//!
//! Lists do not nest and fences are only recognised when they wrap the
//! whole block.

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::BlockType;
