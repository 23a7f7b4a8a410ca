//! # Inline Kinds
//!
//! Syntax markers owned by each inline construct.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIMITER = "**"`
//! - **`Emphasis`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `` DELIMITER = "`" ``
//! - **`LinkSyntax`**: `OPEN = '['`, `CLOSE = ']'`, `URL_OPEN = '('`, `URL_CLOSE = ')'`
//! - **`ImageSyntax`**: `MARKER = '!'`
//!
//! Passes read these constants; they never hardcode `**` or `[`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{ImageSyntax, LinkSyntax};
