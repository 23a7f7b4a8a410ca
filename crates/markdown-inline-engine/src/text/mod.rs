//! # Inline Text Model
//!
//! [`InlineTextNode`] is the intermediate representation between raw text and
//! HTML. Passes in [`crate::parsing`] only ever rewrite `Plain` nodes; every
//! other kind is final once produced.

pub mod kind;
pub mod node;

pub use kind::InlineKind;
pub use node::InlineTextNode;
