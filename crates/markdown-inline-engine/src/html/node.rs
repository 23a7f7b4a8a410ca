use std::fmt;

use super::Attributes;
use crate::error::InlineError;

/// A node of the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> String {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Parent(parent) => parent.attributes(),
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => write!(f, "{leaf}"),
            HtmlNode::Parent(parent) => write!(f, "{parent}"),
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

/// Literal content, optionally wrapped in a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: None,
        }
    }

    /// Untagged leaf; renders as its value alone.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// The tag, if any. An empty tag reads as none.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn to_html(&self) -> String {
        let Some(tag) = self.tag() else {
            return self.value.clone();
        };
        let attrs = self
            .attributes
            .as_ref()
            .map(Attributes::to_html)
            .unwrap_or_default();
        format!("<{tag}{attrs}>{}</{tag}>", self.value)
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafNode(")?;
        if let Some(tag) = self.tag() {
            write!(f, "{tag}, ")?;
        }
        write!(f, "{}", self.value)?;
        if let Some(attrs) = &self.attributes {
            write!(f, ", {attrs}")?;
        }
        write!(f, ")")
    }
}

/// A tagged node whose content is its children.
///
/// The tag is non-empty and there is at least one child; [`ParentNode::new`]
/// enforces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, InlineError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(InlineError::InvalidParentNode {
                reason: "tag cannot be empty",
            });
        }
        if children.is_empty() {
            return Err(InlineError::InvalidParentNode {
                reason: "children cannot be empty",
            });
        }
        Ok(Self {
            tag,
            children,
            attributes: None,
        })
    }

    /// Attaches attributes. They are kept on the node but not rendered.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn to_html(&self) -> String {
        let inner: String = self.children.iter().map(HtmlNode::to_html).collect();
        format!("<{tag}>{inner}</{tag}>", tag = self.tag)
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentNode({}, [", self.tag)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, "]")?;
        if let Some(attrs) = &self.attributes {
            write!(f, ", {attrs}")?;
        }
        write!(f, ")")
    }
}
