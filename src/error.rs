// src/error.rs
use crate::parser::ParseError;
use simplepdf_layout::LayoutError;
use simplepdf_render::RenderError;
use simplepdf_traits::SinkError;
use thiserror::Error;

/// Everything that can stop a source document from becoming a stored PDF.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Could not read the source document: {0}")]
    Parse(#[from] ParseError),

    #[error("Could not lay out the document: {0}")]
    Layout(#[from] LayoutError),

    #[error("Could not serialize the PDF: {0}")]
    Render(#[from] RenderError),

    #[error("Could not store the PDF: {0}")]
    Sink(#[from] SinkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pipeline configuration: {0}")]
    Config(String),
}

/// JSON shows up both as a document tree and as a layout config file; either way it is
/// source text that failed to parse.
impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::Parse(ParseError::Json(e))
    }
}
