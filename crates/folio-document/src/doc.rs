//! The document type: flattened offsets, traversal, and mutation.
//!
//! All offsets exposed by this module are *character* offsets into the
//! flattened text (every text leaf concatenated in document order). Byte
//! offsets never leave this crate; the editor surface and the search
//! kernel both speak characters.

use crate::{
    error::DocumentError,
    node::{ElementKind, ElementNode, Node},
    transaction::{ReplaceOp, Transaction},
};

/// A text leaf located in the flattened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLeaf<'a> {
    /// Character offset of the leaf's first character in the flattened text.
    pub base: usize,
    /// The leaf's text content.
    pub text: &'a str,
}

/// A resolved position: which leaf an absolute offset falls in.
///
/// Used for best-effort scroll-into-view. Leaf indexes follow document
/// order of the text-leaf traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafPosition {
    /// Index of the leaf in document order.
    pub leaf: usize,
    /// Character offset within the leaf.
    pub offset: usize,
}

/// A rich-text document.
///
/// The document owns a root element node and a revision counter. The
/// revision is bumped once per applied transaction and is the change
/// signal callers use to decide when search state is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The root element. Always `ElementKind::Doc`.
    root: ElementNode,
    /// Number of transactions applied since creation.
    revision: u64,
}

impl Document {
    /// Creates a document from a root element.
    pub fn new(root: ElementNode) -> Self {
        Self { root, revision: 0 }
    }

    /// Creates an empty document.
    pub fn empty() -> Self {
        Self::new(ElementNode {
            kind: ElementKind::Doc,
            children: Vec::new(),
        })
    }

    /// Builds a document from plain text.
    ///
    /// Blank-line-separated blocks become paragraphs, each holding a
    /// single text leaf. Used by the CLI to import plain-text content.
    pub fn from_text(text: &str) -> Self {
        let children = text
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| Node::element(ElementKind::Paragraph, vec![Node::text(block)]))
            .collect();
        Self::new(ElementNode {
            kind: ElementKind::Doc,
            children,
        })
    }

    /// Parses a document from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let root: ElementNode = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    /// Serializes the node tree to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Returns the root element.
    pub fn root(&self) -> &ElementNode {
        &self.root
    }

    /// Returns the number of transactions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns all text leaves in document order with their base offsets.
    pub fn text_leaves(&self) -> Vec<TextLeaf<'_>> {
        let mut leaves = Vec::new();
        let mut base = 0;
        collect_leaves(&self.root.children, &mut base, &mut leaves);
        leaves
    }

    /// Returns the full flattened text.
    pub fn flatten(&self) -> String {
        self.text_leaves()
            .iter()
            .map(|leaf| leaf.text)
            .collect::<String>()
    }

    /// Returns the total flattened length in characters.
    pub fn char_len(&self) -> usize {
        self.text_leaves()
            .iter()
            .map(|leaf| leaf.text.chars().count())
            .sum()
    }

    /// Resolves an absolute character offset to a leaf position.
    ///
    /// Returns `None` when the offset is past the end of the document or
    /// the document has no text. This is the best-effort hook behind
    /// scroll-into-view; callers treat `None` as "nothing to scroll to".
    pub fn resolve(&self, offset: usize) -> Option<LeafPosition> {
        for (index, leaf) in self.text_leaves().iter().enumerate() {
            let len = leaf.text.chars().count();
            if offset >= leaf.base && offset < leaf.base + len {
                return Some(LeafPosition {
                    leaf: index,
                    offset: offset - leaf.base,
                });
            }
        }
        None
    }

    /// Applies a transaction atomically.
    ///
    /// Operations are applied in order, each against the document state
    /// left by the previous one. If any operation fails the document is
    /// left untouched and the revision does not advance.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<(), DocumentError> {
        let mut staged = self.root.clone();
        for op in transaction.ops() {
            apply_op(&mut staged, op)?;
        }
        self.root = staged;
        self.revision += 1;
        Ok(())
    }
}

/// Collects text leaves depth-first, advancing the running base offset.
fn collect_leaves<'a>(nodes: &'a [Node], base: &mut usize, out: &mut Vec<TextLeaf<'a>>) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                out.push(TextLeaf {
                    base: *base,
                    text: &text.text,
                });
                *base += text.text.chars().count();
            }
            Node::Element(element) => collect_leaves(&element.children, base, out),
        }
    }
}

/// Applies a single replace operation to the staged tree.
fn apply_op(root: &mut ElementNode, op: &ReplaceOp) -> Result<(), DocumentError> {
    if op.start > op.end {
        return Err(DocumentError::InvalidRange {
            start: op.start,
            end: op.end,
        });
    }

    let mut base = 0;
    if apply_op_to_children(&mut root.children, &mut base, op)? {
        return Ok(());
    }

    // `base` now holds the total document length.
    if op.end > base {
        return Err(DocumentError::RangeOutOfBounds {
            start: op.start,
            end: op.end,
            len: base,
        });
    }
    Err(DocumentError::CrossesLeafBoundary {
        start: op.start,
        end: op.end,
    })
}

/// Walks children looking for the leaf containing the operation's range.
///
/// Returns `Ok(true)` once the operation has been applied. A range that
/// starts inside a leaf but ends beyond it is a boundary-crossing error.
fn apply_op_to_children(
    nodes: &mut [Node],
    base: &mut usize,
    op: &ReplaceOp,
) -> Result<bool, DocumentError> {
    for node in nodes {
        match node {
            Node::Text(text) => {
                let len = text.text.chars().count();
                // A zero-width insert exactly at the leaf end belongs to
                // this leaf; a ranged op starting there belongs to the next.
                let in_leaf = op.start >= *base
                    && (op.start < *base + len
                        || (op.start == *base + len && op.end == op.start));
                if in_leaf {
                    if op.end > *base + len {
                        return Err(DocumentError::CrossesLeafBoundary {
                            start: op.start,
                            end: op.end,
                        });
                    }
                    splice_chars(&mut text.text, op.start - *base, op.end - *base, &op.text);
                    return Ok(true);
                }
                *base += len;
            }
            Node::Element(element) => {
                if apply_op_to_children(&mut element.children, base, op)? {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}

/// Replaces the character range `[start, end)` of `text` with `replacement`.
fn splice_chars(text: &mut String, start: usize, end: usize, replacement: &str) {
    let byte_start = char_to_byte(text, start);
    let byte_end = char_to_byte(text, end);
    text.replace_range(byte_start..byte_end, replacement);
}

/// Converts a character offset into a byte offset within `text`.
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_paragraph_doc() -> Document {
        Document::from_text("first paragraph\n\nsecond paragraph")
    }

    #[test]
    fn flatten_concatenates_leaves() {
        let doc = two_paragraph_doc();
        assert_eq!(doc.flatten(), "first paragraphsecond paragraph");
    }

    #[test]
    fn leaves_carry_base_offsets() {
        let doc = two_paragraph_doc();
        let leaves = doc.text_leaves();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].base, 0);
        assert_eq!(leaves[0].text, "first paragraph");
        assert_eq!(leaves[1].base, 15);
        assert_eq!(leaves[1].text, "second paragraph");
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let doc = Document::from_text("héllo");
        assert_eq!(doc.char_len(), 5);
    }

    #[test]
    fn resolve_finds_leaf_and_local_offset() {
        let doc = two_paragraph_doc();
        assert_eq!(doc.resolve(0), Some(LeafPosition { leaf: 0, offset: 0 }));
        assert_eq!(doc.resolve(17), Some(LeafPosition { leaf: 1, offset: 2 }));
        assert_eq!(doc.resolve(999), None);
    }

    #[test]
    fn apply_replaces_within_leaf() {
        let mut doc = two_paragraph_doc();
        let mut tx = Transaction::new();
        tx.insert_text(0..5, "FIRST");
        doc.apply(&tx).unwrap();
        assert_eq!(doc.flatten(), "FIRST paragraphsecond paragraph");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn apply_replaces_multibyte_text() {
        let mut doc = Document::from_text("naïve café");
        let mut tx = Transaction::new();
        tx.insert_text(6..10, "bar");
        doc.apply(&tx).unwrap();
        assert_eq!(doc.flatten(), "naïve bar");
    }

    #[test]
    fn apply_rejects_cross_leaf_range() {
        let mut doc = two_paragraph_doc();
        let mut tx = Transaction::new();
        tx.insert_text(10..20, "x");
        let err = doc.apply(&tx).unwrap_err();
        assert!(matches!(err, DocumentError::CrossesLeafBoundary { .. }));
        // Atomicity: nothing changed, revision untouched.
        assert_eq!(doc.flatten(), "first paragraphsecond paragraph");
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn apply_rejects_out_of_bounds() {
        let mut doc = Document::from_text("short");
        let mut tx = Transaction::new();
        tx.insert_text(10..12, "x");
        let err = doc.apply(&tx).unwrap_err();
        assert!(matches!(err, DocumentError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn apply_sequential_ops_see_prior_mutations() {
        let mut doc = Document::from_text("aaaa");
        let mut tx = Transaction::new();
        tx.insert_text(0..2, "b");
        // After the first op the text is "baa"; this targets the tail.
        tx.insert_text(1..3, "c");
        doc.apply(&tx).unwrap();
        assert_eq!(doc.flatten(), "bc");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn pure_insertion_at_leaf_end() {
        let mut doc = Document::from_text("ab");
        let mut tx = Transaction::new();
        tx.insert_text(2..2, "c");
        doc.apply(&tx).unwrap();
        assert_eq!(doc.flatten(), "abc");
    }

    #[test]
    fn json_round_trip() {
        let doc = two_paragraph_doc();
        let json = doc.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back.flatten(), doc.flatten());
    }

    #[test]
    fn from_text_skips_blank_blocks() {
        let doc = Document::from_text("one\n\n\n\n   \n\ntwo");
        assert_eq!(doc.text_leaves().len(), 2);
    }

    #[test]
    fn empty_document() {
        let doc = Document::empty();
        assert_eq!(doc.char_len(), 0);
        assert!(doc.text_leaves().is_empty());
        assert_eq!(doc.resolve(0), None);
    }
}
