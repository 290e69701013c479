//! XHTML fragment front end.
//!
//! The fragment is wrapped in a synthetic `<root>` element so that text and several
//! top-level elements may appear side by side. A small internal DTD declares the HTML
//! entities that commonly appear in hand-written markup (`&nbsp;`, `&mdash;`, ...).
//!
//! Each element's `style` attribute is read as a CSS declaration list. Declarations that
//! do not parse are skipped with a warning, unless [`MarkupOptions::strict_styles`] is set.

use super::ParseError;
use log::warn;
use roxmltree::ParsingOptions;
use simplepdf_idf::{Element, Node};
use simplepdf_style::parsers::parse_inline_style;

/// Tag name of the element wrapping every fragment.
pub const ROOT_TAG: &str = "root";

const HTML_ENTITIES: &[(&str, u32)] = &[
    ("nbsp", 160),
    ("laquo", 171),
    ("copy", 169),
    ("reg", 174),
    ("deg", 176),
    ("middot", 183),
    ("raquo", 187),
    ("ndash", 8211),
    ("mdash", 8212),
    ("lsquo", 8216),
    ("rsquo", 8217),
    ("ldquo", 8220),
    ("rdquo", 8221),
    ("bull", 8226),
    ("hellip", 8230),
    ("euro", 8364),
    ("trade", 8482),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Fail on the first invalid style declaration instead of skipping it.
    pub strict_styles: bool,
}

/// Parses an XHTML fragment with default options.
pub fn parse_markup(source: &str) -> Result<Node, ParseError> {
    parse_markup_with(source, &MarkupOptions::default())
}

pub fn parse_markup_with(source: &str, options: &MarkupOptions) -> Result<Node, ParseError> {
    let wrapped = wrap_fragment(source);
    let mut parsing = ParsingOptions::default();
    parsing.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(&wrapped, parsing)?;
    convert_element(doc.root_element(), options)
}

fn wrap_fragment(source: &str) -> String {
    let body = strip_xml_declaration(source);
    let entities: String = HTML_ENTITIES
        .iter()
        .map(|(name, code)| format!("<!ENTITY {} \"&#{};\">", name, code))
        .collect();
    format!(
        "<!DOCTYPE {root} [{entities}]><{root}>{body}</{root}>",
        root = ROOT_TAG,
        entities = entities,
        body = body
    )
}

fn strip_xml_declaration(source: &str) -> &str {
    let trimmed = source.trim_start();
    if trimmed.starts_with("<?xml")
        && let Some(end) = trimmed.find("?>")
    {
        return &trimmed[end + 2..];
    }
    source
}

fn convert_element(node: roxmltree::Node, options: &MarkupOptions) -> Result<Node, ParseError> {
    let tag = node.tag_name().name().to_string();

    let style = match node.attribute("style") {
        Some(declarations) => {
            let (style, errors) = parse_inline_style(declarations);
            if let Some(first) = errors.first()
                && options.strict_styles
            {
                return Err(ParseError::Style {
                    tag,
                    source: first.clone(),
                });
            }
            for error in &errors {
                warn!("Skipping style declaration on <{}>: {}", tag, error);
            }
            style
        }
        None => Default::default(),
    };

    let mut children = Vec::new();
    for child in node.children() {
        if child.is_element() {
            children.push(convert_element(child, options)?);
        } else if child.is_text()
            && let Some(text) = child.text()
        {
            children.push(Node::Text(text.to_string()));
        }
    }

    Ok(Node::Element(Element {
        tag,
        style,
        children,
    }))
}
