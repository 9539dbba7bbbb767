//! Error types for document mutation and serialization.

use thiserror::Error;

/// Errors that can occur when mutating or (de)serializing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A replace range had `start > end`.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Start character offset.
        start: usize,
        /// End character offset.
        end: usize,
    },

    /// A replace range extended past the end of the document.
    #[error("range [{start}, {end}) is out of bounds for document of length {len}")]
    RangeOutOfBounds {
        /// Start character offset.
        start: usize,
        /// End character offset.
        end: usize,
        /// Total document length in characters.
        len: usize,
    },

    /// A replace range spanned more than one text leaf.
    ///
    /// Text replacement is leaf-local: a range that starts in one text
    /// run and ends in another cannot be applied.
    #[error("range [{start}, {end}) crosses a text leaf boundary")]
    CrossesLeafBoundary {
        /// Start character offset.
        start: usize,
        /// End character offset.
        end: usize,
    },

    /// The document JSON could not be parsed or produced.
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
