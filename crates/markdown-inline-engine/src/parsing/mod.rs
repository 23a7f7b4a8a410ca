//! # Inline Parsing
//!
//! Pass-based tokenizing of raw text into [`InlineTextNode`]s.
//!
//! ## Architecture
//!
//! Parsing starts from a single `Plain` node. Each pass rewrites only the
//! `Plain` nodes it is given and copies every other node through, so a span
//! claimed by an earlier pass is never looked at again.
//!
//! ## Modules
//!
//! - **`kinds`**: syntax markers owned by each construct
//! - **`delimiter`**: `split_nodes_delimiter()` for paired markers (`**`, `_`, `` ` ``)
//! - **`links`**: `split_nodes_link_image()` for `[text](url)` and `![alt](url)`
//! - **`pipeline`**: `text_to_nodes()` sequencing the passes
//!
//! ## Pass Order
//!
//! Delimiter passes run first, then images, then links. Images must precede
//! links because every image contains a link-shaped `[alt](url)`.
//!
//! [`InlineTextNode`]: crate::text::InlineTextNode

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod pipeline;

pub use delimiter::split_nodes_delimiter;
pub use links::{
    ImageMarker, extract_markdown_images, extract_markdown_links, split_nodes_image,
    split_nodes_link, split_nodes_link_image,
};
pub use pipeline::{
    DelimiterPass, PipelineOptions, paragraph_to_html_node, text_to_html, text_to_nodes,
};
