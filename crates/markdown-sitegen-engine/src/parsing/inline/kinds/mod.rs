//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "_"`
//! - **`CodeSpan`**: `TICK = "\`"`
//! - **`Image`** / **`Link`**: `![label](url)` and `[label](url)` matchers
//!
//! The parser refers to these constants; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link, LinkMatch};
