use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InlineError;

/// Semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineKind {
    /// Text with no styling, still eligible for further passes.
    Plain,
    Bold,
    Italic,
    Code,
    /// Anchor text with a target url.
    Link,
    /// Alt text with a source url.
    Image,
}

impl InlineKind {
    pub const ALL: [InlineKind; 6] = [
        InlineKind::Plain,
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Code,
        InlineKind::Link,
        InlineKind::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InlineKind::Plain => "plain",
            InlineKind::Bold => "bold",
            InlineKind::Italic => "italic",
            InlineKind::Code => "code",
            InlineKind::Link => "link",
            InlineKind::Image => "image",
        }
    }

    /// Whether nodes of this kind carry a url.
    pub fn requires_url(self) -> bool {
        matches!(self, InlineKind::Link | InlineKind::Image)
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InlineKind {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(InlineKind::Plain),
            "bold" => Ok(InlineKind::Bold),
            "italic" => Ok(InlineKind::Italic),
            "code" => Ok(InlineKind::Code),
            "link" => Ok(InlineKind::Link),
            "image" => Ok(InlineKind::Image),
            _ => Err(InlineError::UnrecognizedNodeKind(s.to_string())),
        }
    }
}
