//! Front ends producing the document tree consumed by layout.
//!
//! - [`markup`]: well-formed XHTML fragments, parsed with roxmltree
//! - [`json`]: the serde form of [`Node`]

mod error;
pub mod json;
pub mod markup;

pub use error::ParseError;
pub use json::parse_json;
pub use markup::{parse_markup, parse_markup_with, MarkupOptions};

use simplepdf_idf::Node;
use std::path::Path;
use std::str::FromStr;

/// The input languages understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Markup,
    Json,
}

impl InputFormat {
    /// Infers the format from a file extension (`.json`, `.html`, `.xhtml`, `.xml`, `.htm`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        extension.parse().ok()
    }

    pub fn parse_source(&self, source: &str, options: &MarkupOptions) -> Result<Node, ParseError> {
        match self {
            InputFormat::Markup => parse_markup_with(source, options),
            InputFormat::Json => parse_json(source),
        }
    }
}

impl FromStr for InputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "markup" | "html" | "htm" | "xhtml" | "xml" => Ok(InputFormat::Markup),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path("doc.json"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path("doc.XHTML"), Some(InputFormat::Markup));
        assert_eq!(InputFormat::from_path("doc.pdf"), None);
        assert_eq!(InputFormat::from_path("noext"), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("Markup".parse::<InputFormat>().unwrap(), InputFormat::Markup);
        assert!(matches!(
            "yaml".parse::<InputFormat>(),
            Err(ParseError::UnsupportedFormat(f)) if f == "yaml"
        ));
    }
}
