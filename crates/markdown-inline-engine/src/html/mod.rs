//! # HTML Nodes
//!
//! A minimal HTML tree: leaves hold literal text, parents hold children.
//! [`text_node_to_html_node`] is the only bridge from the inline text model.
//!
//! Rendering performs no escaping. Values and attribute values are written
//! exactly as given.

pub mod attributes;
pub mod node;
pub mod translate;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
pub use translate::{text_node_to_html_node, text_nodes_to_html_nodes};
