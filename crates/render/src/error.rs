use simplepdf_traits::{MetricsError, SinkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("'{operation}' requires a current page; call add_page() first")]
    NoCurrentPage { operation: &'static str },
    #[error("Cannot finalize a document with no pages")]
    NoPages,
    #[error("Unknown object id: {0}")]
    UnknownObject(u32),
    #[error("Text metrics error: {0}")]
    Metrics(#[from] MetricsError),
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
