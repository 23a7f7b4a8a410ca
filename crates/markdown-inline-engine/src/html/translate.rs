use super::{Attributes, HtmlNode, LeafNode};
use crate::{
    error::InlineError,
    text::{InlineKind, InlineTextNode},
};

pub const BOLD_TAG: &str = "b";
pub const ITALIC_TAG: &str = "i";
pub const CODE_TAG: &str = "code";
pub const LINK_TAG: &str = "a";
pub const IMAGE_TAG: &str = "img";

/// Maps an inline node to a leaf.
///
/// | kind   | tag    | value | attributes |
/// |--------|--------|-------|------------|
/// | Plain  | none   | text  | none |
/// | Bold   | `b`    | text  | none |
/// | Italic | `i`    | text  | none |
/// | Code   | `code` | text  | none |
/// | Link   | `a`    | text  | `href` |
/// | Image  | `img`  | empty | `src`, `alt` |
///
/// Links and images without a url fail with [`InlineError::MissingUrl`].
pub fn text_node_to_html_node(node: &InlineTextNode) -> Result<HtmlNode, InlineError> {
    let leaf = match node.kind() {
        InlineKind::Plain => LeafNode::text(node.text()),
        InlineKind::Bold => LeafNode::new(BOLD_TAG, node.text()),
        InlineKind::Italic => LeafNode::new(ITALIC_TAG, node.text()),
        InlineKind::Code => LeafNode::new(CODE_TAG, node.text()),
        InlineKind::Link => {
            let href = require_url(node)?;
            let attrs: Attributes = [("href", href)].into_iter().collect();
            LeafNode::new(LINK_TAG, node.text()).with_attributes(attrs)
        }
        InlineKind::Image => {
            let src = require_url(node)?;
            let attrs: Attributes = [("src", src), ("alt", node.text())].into_iter().collect();
            LeafNode::new(IMAGE_TAG, "").with_attributes(attrs)
        }
    };
    Ok(leaf.into())
}

/// Maps every node, stopping at the first failure.
pub fn text_nodes_to_html_nodes(nodes: &[InlineTextNode]) -> Result<Vec<HtmlNode>, InlineError> {
    nodes.iter().map(text_node_to_html_node).collect()
}

fn require_url(node: &InlineTextNode) -> Result<&str, InlineError> {
    node.url().ok_or_else(|| InlineError::MissingUrl {
        kind: node.kind(),
        text: node.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn plain_text_has_no_tag() {
        let html = text_node_to_html_node(&InlineTextNode::plain("This is a text node")).unwrap();
        let HtmlNode::Leaf(leaf) = &html else {
            panic!("expected a leaf");
        };
        assert_eq!(leaf.tag(), None);
        assert_eq!(leaf.value(), "This is a text node");
    }

    #[rstest]
    #[case(InlineKind::Plain, "x")]
    #[case(InlineKind::Bold, "<b>x</b>")]
    #[case(InlineKind::Italic, "<i>x</i>")]
    #[case(InlineKind::Code, "<code>x</code>")]
    fn styled_kinds_render(#[case] kind: InlineKind, #[case] expected: &str) {
        let html = text_node_to_html_node(&InlineTextNode::new("x", kind)).unwrap();
        assert_eq!(html.to_html(), expected);
    }

    #[test]
    fn link_gets_href() {
        let html =
            text_node_to_html_node(&InlineTextNode::link("boot.dev", "https://www.boot.dev"))
                .unwrap();
        assert_eq!(html.tag(), Some("a"));
        assert_eq!(
            html.to_html(),
            r#"<a href="https://www.boot.dev">boot.dev</a>"#
        );
    }

    #[test]
    fn image_gets_src_then_alt_and_empty_value() {
        let html =
            text_node_to_html_node(&InlineTextNode::image("a cat", "https://c/at.png")).unwrap();
        let HtmlNode::Leaf(leaf) = &html else {
            panic!("expected a leaf");
        };
        assert_eq!(leaf.value(), "");
        assert_eq!(
            leaf.attributes().map(|a| a.iter().collect::<Vec<_>>()),
            Some(vec![("src", "https://c/at.png"), ("alt", "a cat")])
        );
        assert_eq!(
            html.to_html(),
            r#"<img src="https://c/at.png" alt="a cat"></img>"#
        );
    }

    #[rstest]
    #[case(InlineKind::Link)]
    #[case(InlineKind::Image)]
    fn missing_url_is_an_error(#[case] kind: InlineKind) {
        let err = text_node_to_html_node(&InlineTextNode::new("t", kind)).unwrap_err();
        assert_eq!(
            err,
            InlineError::MissingUrl {
                kind,
                text: "t".to_string()
            }
        );
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let nodes = vec![
            InlineTextNode::plain("ok"),
            InlineTextNode::new("bad", InlineKind::Link),
            InlineTextNode::new("never", InlineKind::Image),
        ];
        let err = text_nodes_to_html_nodes(&nodes).unwrap_err();
        assert!(matches!(err, InlineError::MissingUrl { kind: InlineKind::Link, .. }));
    }
}
