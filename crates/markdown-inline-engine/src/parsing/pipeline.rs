use serde::{Deserialize, Serialize};

use super::{
    delimiter::split_nodes_delimiter,
    kinds::{CodeSpan, Emphasis, Strong},
    links::{ImageMarker, split_nodes_image, split_nodes_link},
};
use crate::{
    error::InlineError,
    html::{HtmlNode, ParentNode, text_nodes_to_html_nodes},
    text::{InlineKind, InlineTextNode},
};

/// One delimiter pass: text between paired `delimiter`s becomes `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPass {
    pub delimiter: String,
    pub kind: InlineKind,
}

impl DelimiterPass {
    pub fn new(delimiter: impl Into<String>, kind: InlineKind) -> Self {
        Self {
            delimiter: delimiter.into(),
            kind,
        }
    }
}

/// Which passes run, and in what order.
///
/// Delimiter passes run first in list order, then images, then links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub image_marker: ImageMarker,
    pub delimiters: Vec<DelimiterPass>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            image_marker: ImageMarker::default(),
            delimiters: vec![
                DelimiterPass::new(Strong::DELIMITER, InlineKind::Bold),
                DelimiterPass::new(Emphasis::DELIMITER, InlineKind::Italic),
                DelimiterPass::new(CodeSpan::DELIMITER, InlineKind::Code),
            ],
        }
    }
}

impl PipelineOptions {
    /// Rejects empty delimiters, delimiters targeting link or image kinds,
    /// and any delimiter that runs before a longer one it is a prefix of.
    pub fn validate(&self) -> Result<(), InlineError> {
        for (i, pass) in self.delimiters.iter().enumerate() {
            if pass.delimiter.is_empty() {
                return Err(InlineError::EmptyDelimiter);
            }
            if pass.kind.requires_url() {
                return Err(InlineError::InvalidDelimiterKind {
                    delimiter: pass.delimiter.clone(),
                    kind: pass.kind,
                });
            }
            let shadowed = self.delimiters[i + 1..].iter().find(|later| {
                later.delimiter.len() > pass.delimiter.len()
                    && later.delimiter.starts_with(&pass.delimiter)
            });
            if let Some(later) = shadowed {
                return Err(InlineError::AmbiguousDelimiterOrder {
                    earlier: pass.delimiter.clone(),
                    later: later.delimiter.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Runs every pass over `text`, returning the final inline nodes.
pub fn text_to_nodes(
    text: &str,
    options: &PipelineOptions,
) -> Result<Vec<InlineTextNode>, InlineError> {
    options.validate()?;

    let mut nodes = vec![InlineTextNode::plain(text)];
    for pass in &options.delimiters {
        nodes = split_nodes_delimiter(&nodes, &pass.delimiter, pass.kind)?;
    }
    nodes = split_nodes_image(&nodes, options.image_marker)?;
    nodes = split_nodes_link(&nodes)?;

    log::debug!("parsed {} bytes into {} inline nodes", text.len(), nodes.len());
    Ok(nodes)
}

/// Parses `text` and renders the leaves back to back, without a wrapper.
pub fn text_to_html(text: &str, options: &PipelineOptions) -> Result<String, InlineError> {
    let leaves = text_nodes_to_html_nodes(&text_to_nodes(text, options)?)?;
    Ok(leaves.iter().map(HtmlNode::to_html).collect())
}

/// Parses `text` and wraps its leaves in a `tag` parent, e.g. `<p>`.
///
/// Fails with [`InlineError::InvalidParentNode`] when `text` yields no nodes.
pub fn paragraph_to_html_node(
    text: &str,
    tag: &str,
    options: &PipelineOptions,
) -> Result<HtmlNode, InlineError> {
    let leaves = text_nodes_to_html_nodes(&text_to_nodes(text, options)?)?;
    Ok(ParentNode::new(tag, leaves)?.into())
}
