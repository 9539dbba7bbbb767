//! Scanning the document for matches.

use folio_document::Document;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One search hit as half-open character offsets into the flattened
/// document text.
///
/// Invariants: `start < end`; ranges are produced in document order and
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
}

impl MatchRange {
    /// Returns the match length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the range is empty. Scanner output never is.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds every match of `pattern` in the document.
///
/// Each text leaf is scanned independently against its local text, and
/// local spans are translated into absolute offsets by adding the leaf's
/// base offset. Matches whose text is empty or whitespace-only are
/// discarded, which keeps pathological zero-width patterns from
/// producing endless decorations.
///
/// Matches never span leaf boundaries: a term split across two adjacent
/// text runs (an inline style boundary, say) is not found. That is the
/// editor's search semantics, not an oversight; callers rely on
/// leaf-local matching.
pub fn scan_document(doc: &Document, pattern: &Regex) -> Vec<MatchRange> {
    let mut matches = Vec::new();

    for leaf in doc.text_leaves() {
        for found in pattern.find_iter(leaf.text) {
            if found.as_str().trim().is_empty() {
                continue;
            }
            let start = byte_to_char(leaf.text, found.start());
            let end = byte_to_char(leaf.text, found.end());
            matches.push(MatchRange {
                start: leaf.base + start,
                end: leaf.base + end,
            });
        }
    }

    matches
}

/// Converts a byte offset within `text` into a character offset.
fn byte_to_char(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

#[cfg(test)]
mod tests {
    use folio_document::{ElementKind, ElementNode, Mark, Node, TextNode};

    use super::*;
    use crate::pattern::build_pattern;

    fn doc_of(text: &str) -> Document {
        Document::from_text(text)
    }

    #[test]
    fn finds_all_occurrences_in_order() {
        let doc = doc_of("one two one two one");
        let re = build_pattern("one", true, true).unwrap();
        let matches = scan_document(&doc, &re);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0], MatchRange { start: 0, end: 3 });
        assert_eq!(matches[1], MatchRange { start: 8, end: 11 });
        assert_eq!(matches[2], MatchRange { start: 16, end: 19 });
        assert!(matches.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn offsets_are_absolute_across_leaves() {
        let doc = doc_of("alpha beta\n\nbeta gamma");
        let re = build_pattern("beta", true, true).unwrap();
        let matches = scan_document(&doc, &re);
        // First leaf is "alpha beta" (10 chars), second starts at base 10.
        assert_eq!(matches, vec![
            MatchRange { start: 6, end: 10 },
            MatchRange { start: 10, end: 14 },
        ]);
    }

    #[test]
    fn case_sensitivity_toggle() {
        let doc = doc_of("foo FOO Foo");
        let insensitive = build_pattern("Foo", true, false).unwrap();
        assert_eq!(scan_document(&doc, &insensitive).len(), 3);

        let sensitive = build_pattern("Foo", true, true).unwrap();
        let matches = scan_document(&doc, &sensitive);
        assert_eq!(matches, vec![MatchRange { start: 8, end: 11 }]);
    }

    #[test]
    fn literal_mode_does_not_wildcard() {
        let doc = doc_of("axb a.b");
        let re = build_pattern("a.b", true, true).unwrap();
        let matches = scan_document(&doc, &re);
        assert_eq!(matches, vec![MatchRange { start: 4, end: 7 }]);
    }

    #[test]
    fn whitespace_only_matches_are_discarded() {
        let doc = doc_of("a b c");
        // In regex mode "\s+" matches the gaps; all are whitespace-only.
        let re = build_pattern(r"\s+", false, true).unwrap();
        assert!(scan_document(&doc, &re).is_empty());
    }

    #[test]
    fn zero_width_matches_are_discarded() {
        let doc = doc_of("abc");
        let re = build_pattern("x*", false, true).unwrap();
        assert!(scan_document(&doc, &re).is_empty());
    }

    #[test]
    fn matches_do_not_span_leaf_boundaries() {
        // "hello wo" + "rld" as adjacent runs inside one paragraph.
        let root = ElementNode {
            kind: ElementKind::Doc,
            children: vec![Node::element(ElementKind::Paragraph, vec![
                Node::text("hello wo"),
                Node::Text(TextNode {
                    text: "rld".into(),
                    marks: vec![Mark::Bold],
                }),
            ])],
        };
        let doc = Document::new(root);
        assert_eq!(doc.flatten(), "hello world");

        let re = build_pattern("world", true, true).unwrap();
        assert!(scan_document(&doc, &re).is_empty());
    }

    #[test]
    fn multibyte_offsets_are_character_based() {
        let doc = doc_of("héllo héllo");
        let re = build_pattern("héllo", true, true).unwrap();
        let matches = scan_document(&doc, &re);
        assert_eq!(matches, vec![
            MatchRange { start: 0, end: 5 },
            MatchRange { start: 6, end: 11 },
        ]);
    }
}
