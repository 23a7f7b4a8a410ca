use crate::text::InlineKind;

/// Errors raised while splitting, extracting, translating or assembling
/// inline nodes.
///
/// Every pass stops at the first error and returns no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("No closing delimiter found for '{delimiter}' in {text:?}")]
    UnterminatedDelimiter { delimiter: String, text: String },

    #[error("No closing ']' found for '[' in {text:?}")]
    UnterminatedBracket { text: String },

    #[error("No '(url)' found after ']' in {text:?}")]
    UnterminatedUrl { text: String },

    #[error("Cannot extract {0} nodes, expected link or image")]
    InvalidExtractionKind(InlineKind),

    #[error("Unrecognized inline kind: {0:?}")]
    UnrecognizedNodeKind(String),

    #[error("Invalid parent node: {reason}")]
    InvalidParentNode { reason: &'static str },

    #[error("{kind} node {text:?} has no url")]
    MissingUrl { kind: InlineKind, text: String },

    #[error("Delimiter cannot be empty")]
    EmptyDelimiter,

    #[error("Delimiter '{delimiter}' cannot produce {kind} nodes, which need a url")]
    InvalidDelimiterKind { delimiter: String, kind: InlineKind },

    #[error("Delimiter '{earlier}' runs before '{later}', which it is a prefix of")]
    AmbiguousDelimiterOrder { earlier: String, later: String },
}
