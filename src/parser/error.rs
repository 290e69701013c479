//! Errors raised while turning input text into a document tree.
use simplepdf_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Markup parsing error (roxmltree): {0}")]
    Markup(#[from] roxmltree::Error),

    #[error("Invalid style on <{tag}>: {source}")]
    Style {
        tag: String,
        #[source]
        source: StyleParseError,
    },

    #[error("Unsupported input format: '{0}'")]
    UnsupportedFormat(String),
}
