use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::kinds::{ImageSyntax, LinkSyntax};
use crate::{
    error::InlineError,
    text::{InlineKind, InlineTextNode},
};

/// How the image pass treats the `!` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMarker {
    /// Only `![` opens an image and only that `!` is dropped.
    #[default]
    Adjacent,
    /// Every `!` in a plain node is removed before scanning, then any `[`
    /// opens an image, links included.
    StripAll,
}

/// Rewrites `[text](url)` (for [`InlineKind::Link`]) or `![alt](url)` (for
/// [`InlineKind::Image`]) spans inside `Plain` nodes.
///
/// Images use [`ImageMarker::default`]. Any other `kind` fails with
/// [`InlineError::InvalidExtractionKind`].
pub fn split_nodes_link_image(
    nodes: &[InlineTextNode],
    kind: InlineKind,
) -> Result<Vec<InlineTextNode>, InlineError> {
    match kind {
        InlineKind::Link => split_nodes_link(nodes),
        InlineKind::Image => split_nodes_image(nodes, ImageMarker::default()),
        other => Err(InlineError::InvalidExtractionKind(other)),
    }
}

pub fn split_nodes_link(nodes: &[InlineTextNode]) -> Result<Vec<InlineTextNode>, InlineError> {
    let opener = LinkSyntax::OPEN.to_string();
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }
        scan_brackets(node.text(), &opener, InlineKind::Link, &mut out)?;
    }
    log::trace!("link pass: {} nodes in, {} nodes out", nodes.len(), out.len());
    Ok(out)
}

pub fn split_nodes_image(
    nodes: &[InlineTextNode],
    marker: ImageMarker,
) -> Result<Vec<InlineTextNode>, InlineError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }
        match marker {
            ImageMarker::Adjacent => {
                scan_brackets(node.text(), ImageSyntax::OPEN, InlineKind::Image, &mut out)?
            }
            ImageMarker::StripAll => {
                let stripped = node.text().replace(ImageSyntax::MARKER, "");
                let opener = LinkSyntax::OPEN.to_string();
                scan_brackets(&stripped, &opener, InlineKind::Image, &mut out)?
            }
        }
    }
    log::trace!(
        "image pass ({marker:?}): {} nodes in, {} nodes out",
        nodes.len(),
        out.len()
    );
    Ok(out)
}

/// Finds `opener label ] ... ( url )` spans left to right.
///
/// The `(` is the first one after `]`, wherever it is; text between the two
/// is dropped.
fn scan_brackets(
    text: &str,
    opener: &str,
    kind: InlineKind,
    out: &mut Vec<InlineTextNode>,
) -> Result<(), InlineError> {
    let mut rest = text;
    loop {
        let Some(open) = rest.find(opener) else {
            if !rest.is_empty() {
                out.push(InlineTextNode::plain(rest));
            }
            return Ok(());
        };

        let label_start = open + opener.len();
        let Some(label_end) = find_from(rest, label_start, LinkSyntax::CLOSE) else {
            return Err(InlineError::UnterminatedBracket {
                text: text.to_string(),
            });
        };
        let unterminated_url = || InlineError::UnterminatedUrl {
            text: text.to_string(),
        };
        let after_label = label_end + LinkSyntax::CLOSE.len_utf8();
        let url_open =
            find_from(rest, after_label, LinkSyntax::URL_OPEN).ok_or_else(unterminated_url)?;
        let url_start = url_open + LinkSyntax::URL_OPEN.len_utf8();
        let url_end =
            find_from(rest, url_start, LinkSyntax::URL_CLOSE).ok_or_else(unterminated_url)?;

        if open > 0 {
            out.push(InlineTextNode::plain(&rest[..open]));
        }
        out.push(InlineTextNode::with_url(
            &rest[label_start..label_end],
            kind,
            &rest[url_start..url_end],
        ));

        rest = &rest[url_end + LinkSyntax::URL_CLOSE.len_utf8()..];
    }
}

/// Byte index of the first `c` at or after `from`.
fn find_from(s: &str, from: usize, c: char) -> Option<usize> {
    s[from..].find(c).map(|i| from + i)
}

fn bracket_regex() -> &'static Regex {
    static BRACKET_REGEX: OnceLock<Regex> = OnceLock::new();
    BRACKET_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid bracket regex")
    })
}

/// Returns `(alt, url)` for every `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(text, true)
}

/// Returns `(anchor, url)` for every `[anchor](url)` in `text` that is not
/// an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(text, false)
}

fn extract_pairs(text: &str, images: bool) -> Vec<(String, String)> {
    bracket_regex()
        .captures_iter(text)
        .filter(|caps| {
            let start = caps.get(0).map_or(0, |m| m.start());
            let has_marker = text[..start].ends_with(ImageSyntax::MARKER);
            has_marker == images
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
