//! Intermediate Document Format (IDF)
//! The in-memory representation of a styled document after parsing but before layout.
//! It is independent of any host document model: front ends (markup, JSON) build it,
//! the layout engine consumes it.

use serde::{Deserialize, Serialize};
use simplepdf_style::StyleOverride;

/// A node of the document tree.
///
/// Deserializes from either a JSON string (a text node) or an object with `tag`, optional
/// `style` and optional `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Literal text content.
    Text(String),
    /// An element with a tag name, local style overrides and ordered children.
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            style: StyleOverride::default(),
            children,
        })
    }

    pub fn styled(tag: impl Into<String>, style: StyleOverride, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            style,
            children,
        })
    }

    /// Returns the node's tag, or `None` for text nodes.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => Some(el.kind()),
        }
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

impl Element {
    pub fn kind(&self) -> Tag {
        Tag::from_name(&self.tag)
    }
}

/// The tag names the layout engine gives meaning to. Everything else is a plain container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `h1`..`h6`; the level is always in `1..=6`.
    Heading(u8),
    Paragraph,
    LineBreak,
    Bold,
    Italic,
    Underline,
    Container,
}

impl Tag {
    /// Classifies a tag name, case-insensitively.
    pub fn from_name(name: &str) -> Tag {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "p" => Tag::Paragraph,
            "br" => Tag::LineBreak,
            "b" | "strong" => Tag::Bold,
            "i" | "em" => Tag::Italic,
            "u" => Tag::Underline,
            _ => match lower.as_bytes() {
                [b'h', level @ b'1'..=b'6'] => Tag::Heading(level - b'0'),
                _ => Tag::Container,
            },
        }
    }

    /// Headings and paragraphs start and end on their own line.
    pub fn is_block(&self) -> bool {
        matches!(self, Tag::Heading(_) | Tag::Paragraph)
    }
}
