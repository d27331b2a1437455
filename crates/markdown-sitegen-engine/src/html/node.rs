use crate::error::{MarkdownError, Result};

use super::Attributes;

/// The one tag allowed to render with an empty value.
pub const IMG_TAG: &str = "img";

/// A node of the HTML tree produced by the compiler.
///
/// Leaves carry text, parents carry children. The tree is built once per
/// conversion and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// A childless node: inline text, optionally wrapped in a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` emits the value verbatim with no surrounding tag.
    pub tag: Option<String>,
    pub value: String,
    pub attributes: Attributes,
}

/// A node wrapping an ordered list of children under one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    /// Text emitted before *each* child, not once before all of them.
    pub value: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl LeafNode {
    /// Checks the leaf can be rendered.
    ///
    /// A leaf needs a value, except an `img` leaf whose content lives in its
    /// attributes.
    pub fn validate(&self) -> Result<()> {
        if self.value.is_empty() && self.tag.as_deref() != Some(IMG_TAG) {
            return Err(MarkdownError::InvalidLeaf {
                tag: self.tag.clone(),
            });
        }
        Ok(())
    }

    pub fn to_html(&self) -> Result<String> {
        self.validate()?;
        Ok(match &self.tag {
            None => self.value.clone(),
            Some(tag) => format!(
                "<{tag}{attrs}>{value}</{tag}>",
                attrs = self.attributes.to_html(),
                value = self.value
            ),
        })
    }
}

impl ParentNode {
    pub fn validate(&self) -> Result<()> {
        if self.tag.as_deref().is_none_or(str::is_empty) {
            return Err(MarkdownError::InvalidParent {
                reason: "no tag provided for parent node",
            });
        }
        if self.children.is_empty() {
            return Err(MarkdownError::InvalidParent {
                reason: "no children provided for parent node",
            });
        }
        Ok(())
    }

    pub fn to_html(&self) -> Result<String> {
        self.validate()?;
        let tag = self.tag.as_deref().unwrap_or_default();
        let prefix = self.value.as_deref().unwrap_or_default();

        let mut inner = String::new();
        for child in &self.children {
            inner.push_str(prefix);
            inner.push_str(&child.to_html()?);
        }
        Ok(format!(
            "<{tag}{attrs}>{inner}</{tag}>",
            attrs = self.attributes.to_html()
        ))
    }
}

impl HtmlNode {
    /// A tagless leaf: plain text emitted as-is.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with(tag, value, Attributes::new())
    }

    pub fn leaf_with(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: value.into(),
            attributes,
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            value: None,
            children,
            attributes: Attributes::new(),
        })
    }

    /// A parent whose `prefix` is emitted before every child.
    pub fn parent_with_prefix(
        tag: impl Into<String>,
        prefix: impl Into<String>,
        children: Vec<HtmlNode>,
    ) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            value: Some(prefix.into()),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Serializes the subtree depth-first.
    ///
    /// Fails on the first node that breaks the leaf/parent invariants.
    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Free-function form of [`HtmlNode::to_html`].
pub fn render(node: &HtmlNode) -> Result<String> {
    node.to_html()
}
