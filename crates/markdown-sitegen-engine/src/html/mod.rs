//! # HTML Node Model
//!
//! A two-case tree (`Leaf` / `Parent`) with deterministic serialization.
//!
//! ## Invariants
//!
//! - A leaf needs a non-empty value, except `<img>` whose payload lives in
//!   its attributes
//! - A parent needs a tag and at least one child
//! - Text and attribute values are emitted as-is, without HTML escaping

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, IMG_TAG, LeafNode, ParentNode, render};
