use std::fmt;

use serde::Serialize;

use super::InlineKind;

/// A run of text tagged with its inline kind.
///
/// Values are immutable once built; passes produce new nodes instead of
/// editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InlineTextNode {
    text: String,
    kind: InlineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl InlineTextNode {
    /// Creates a node without a url.
    pub fn new(text: impl Into<String>, kind: InlineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: InlineKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, InlineKind::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, InlineKind::Image, url)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> InlineKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }
}

impl fmt::Display for InlineTextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextNode({}, {}, {})", self.text, self.kind, url),
            None => write!(f, "TextNode({}, {})", self.text, self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            InlineTextNode::new("same", InlineKind::Bold),
            InlineTextNode::new("same", InlineKind::Bold)
        );
        assert_ne!(
            InlineTextNode::new("same", InlineKind::Bold),
            InlineTextNode::new("same", InlineKind::Italic)
        );
        assert_ne!(
            InlineTextNode::link("same", "https://a"),
            InlineTextNode::link("same", "https://b")
        );
        assert_ne!(
            InlineTextNode::new("same", InlineKind::Link),
            InlineTextNode::link("same", "https://a")
        );
    }

    #[test]
    fn shorthands_set_kind_and_url() {
        let img = InlineTextNode::image("alt", "https://x/y.png");
        assert_eq!(img.kind(), InlineKind::Image);
        assert_eq!(img.text(), "alt");
        assert_eq!(img.url(), Some("https://x/y.png"));

        let plain = InlineTextNode::plain("hi");
        assert!(plain.is_plain());
        assert_eq!(plain.url(), None);
    }

    #[test]
    fn display_includes_url_only_when_present() {
        assert_eq!(
            InlineTextNode::new("x", InlineKind::Code).to_string(),
            "TextNode(x, code)"
        );
        assert_eq!(
            InlineTextNode::link("boot", "https://www.boot.dev").to_string(),
            "TextNode(boot, link, https://www.boot.dev)"
        );
    }
}
