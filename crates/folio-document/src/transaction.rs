//! Transactions: batched text replacement applied atomically.

use std::ops::Range;

/// A single text replacement in flattened character coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOp {
    /// Start character offset (inclusive).
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// The replacement text. May be empty (deletion).
    pub text: String,
}

/// An ordered batch of replace operations.
///
/// Operations are applied in insertion order, each against the document
/// state produced by the previous one. Callers performing multiple
/// replacements in one transaction are responsible for rebasing later
/// offsets; the replace engine does exactly that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The queued operations.
    ops: Vec<ReplaceOp>,
}

impl Transaction {
    /// Creates an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a replacement of `range` with `text`.
    ///
    /// An empty range inserts without deleting; empty text deletes the
    /// range.
    pub fn insert_text(&mut self, range: Range<usize>, text: impl Into<String>) -> &mut Self {
        self.ops.push(ReplaceOp {
            start: range.start,
            end: range.end,
            text: text.into(),
        });
        self
    }

    /// Returns the queued operations in order.
    pub fn ops(&self) -> &[ReplaceOp] {
        &self.ops
    }

    /// Returns true if no operations are queued.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_text_queues_in_order() {
        let mut tx = Transaction::new();
        tx.insert_text(0..3, "a").insert_text(5..5, "b");
        assert_eq!(tx.ops().len(), 2);
        assert_eq!(tx.ops()[0].text, "a");
        assert_eq!(tx.ops()[1].start, 5);
        assert_eq!(tx.ops()[1].end, 5);
    }

    #[test]
    fn new_transaction_is_empty() {
        assert!(Transaction::new().is_empty());
    }
}
