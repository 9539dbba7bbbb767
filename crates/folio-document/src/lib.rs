//! Document parsing and transactional mutation for folio.
//!
//! This crate represents rich-text editor content as a tree of element and
//! text nodes, mirroring the JSON shape the editor persists. It supports:
//! - Flattened character-offset coordinates over all text runs
//! - Read-only traversal of text leaves in document order
//! - Atomic, transaction-based text replacement
//! - JSON round-tripping of the node tree

#![warn(missing_docs)]

mod doc;
mod error;
mod node;
mod transaction;

pub use doc::{Document, LeafPosition, TextLeaf};
pub use error::DocumentError;
pub use node::{ElementKind, ElementNode, Mark, Node, TextNode};
pub use transaction::{ReplaceOp, Transaction};
