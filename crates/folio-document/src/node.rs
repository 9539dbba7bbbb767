//! Node structures for the rich-text document tree.
//!
//! The tree is a tagged variant of element nodes (paragraphs, headings,
//! lists...) and text leaves. Text leaves are the only nodes that carry
//! content; everything the search kernel sees flows through them.

use serde::{Deserialize, Serialize};

/// A node in the document tree: either a structural element or a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// A structural element with children.
    Element(ElementNode),
    /// A leaf text run.
    Text(TextNode),
}

impl Node {
    /// Creates a text node with no marks.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextNode {
            text: content.into(),
            marks: Vec::new(),
        })
    }

    /// Creates an element node of the given kind.
    pub fn element(kind: ElementKind, children: Vec<Self>) -> Self {
        Self::Element(ElementNode { kind, children })
    }

    /// Returns the text content if this is a text node.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

/// A structural element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    /// What kind of element this is.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// The kind of a structural element.
///
/// The variants cover the block types the editor toolbar can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementKind {
    /// The document root.
    Doc,
    /// A paragraph of inline content.
    Paragraph,
    /// A heading with a level (1-6).
    Heading {
        /// Heading level, 1 for h1 through 6 for h6.
        level: u8,
    },
    /// A block quotation.
    Blockquote,
    /// A fenced code block.
    CodeBlock,
    /// An unordered list.
    BulletList,
    /// An ordered list.
    OrderedList,
    /// One item within a list.
    ListItem,
    /// A thematic break. Carries no text.
    HorizontalRule,
}

/// A leaf text run with optional inline marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// The text content.
    pub text: String,
    /// Inline formatting applied to the whole run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// Inline formatting on a text run.
///
/// A style boundary splits text into separate runs, which is why search
/// matches never span across leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mark", rename_all = "camelCase")]
pub enum Mark {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strike,
    /// Inline code.
    Code,
    /// A hyperlink.
    Link {
        /// The link target.
        href: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_node_creation() {
        let node = Node::text("hello");
        let text = node.as_text().unwrap();
        assert_eq!(text.text, "hello");
        assert!(text.marks.is_empty());
    }

    #[test]
    fn element_node_creation() {
        let para = Node::element(ElementKind::Paragraph, vec![Node::text("body")]);
        assert!(para.as_text().is_none());
        match para {
            Node::Element(el) => {
                assert_eq!(el.kind, ElementKind::Paragraph);
                assert_eq!(el.children.len(), 1);
            }
            Node::Text(_) => panic!("expected element"),
        }
    }

    #[test]
    fn json_round_trip() {
        let node = Node::element(
            ElementKind::Heading { level: 2 },
            vec![
                Node::text("plain "),
                Node::Text(TextNode {
                    text: "bold".into(),
                    marks: vec![Mark::Bold],
                }),
            ],
        );
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn json_shape_is_tagged() {
        let node = Node::text("x");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "x");
    }
}
