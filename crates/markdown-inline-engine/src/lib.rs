pub mod error;
pub mod html;
pub mod parsing;
pub mod text;

// Re-export key types for easier usage
pub use error::InlineError;
pub use html::{
    Attributes, HtmlNode, LeafNode, ParentNode, text_node_to_html_node, text_nodes_to_html_nodes,
};
pub use parsing::{
    DelimiterPass, ImageMarker, PipelineOptions, extract_markdown_images, extract_markdown_links,
    paragraph_to_html_node, split_nodes_delimiter, split_nodes_image, split_nodes_link,
    split_nodes_link_image, text_to_html, text_to_nodes,
};
pub use text::{InlineKind, InlineTextNode};
