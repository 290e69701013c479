//! JSON front end.
//!
//! A document is a single node: a string is text, an object is an element with a `tag`,
//! an optional camelCase `style` and optional `children`.
//!
//! ```json
//! { "tag": "div", "children": [
//!     { "tag": "h1", "children": ["Quarterly report"] },
//!     { "tag": "p", "style": { "color": "#444", "fontSize": "11pt" },
//!       "children": ["Revenue grew ", { "tag": "b", "children": ["12%"] }, "."] }
//! ] }
//! ```

use super::ParseError;
use serde_json::Value;
use simplepdf_idf::Node;

pub fn parse_json(source: &str) -> Result<Node, ParseError> {
    Ok(serde_json::from_str(source)?)
}

/// Converts an already-parsed JSON value.
pub fn node_from_value(value: Value) -> Result<Node, ParseError> {
    Ok(serde_json::from_value(value)?)
}
