//! # Inline Tokenizing
//!
//! Turns the text of a block into a flat sequence of [`TextSpan`]s.
//!
//! ## Stages
//!
//! Each stage is a pure `Vec<TextSpan> -> Vec<TextSpan>` transformation that
//! only rewrites spans still marked `Plain`:
//!
//! 1. `**` bold, `_` italic, `` ` `` code (delimiter splitting)
//! 2. `![alt](url)` images
//! 3. `[text](url)` links
//!
//! Emphasis does not nest: `**a _b_ c**` yields one bold span whose text
//! still contains the underscores.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan`, `SpanKind`
//! - **`kinds`**: delimiter owners (`Emphasis`, `CodeSpan`, `Image`, `Link`)
//! - **`parser`**: `tokenize()` and the individual stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{split_delimiter, split_images, split_links, tokenize};
pub use types::{SpanKind, TextSpan};
