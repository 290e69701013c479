//! DocumentSink trait for abstracting where finished documents go.
//!
//! The engine never touches storage itself. A produced document is handed, together with
//! a file name and a MIME type, to a sink supplied by the host: a directory on disk, an
//! in-memory collection, a download prompt.

use std::fmt::Debug;
use thiserror::Error;

/// MIME type attached to every PDF handed to a sink.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Error type for sink operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    #[error("Invalid document name: '{0}'")]
    InvalidName(String),

    #[error("Sink rejected '{name}': {reason}")]
    Rejected { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}

/// A destination for finished documents.
///
/// # Implementations
///
/// - [`InMemorySink`]: keeps every document in memory (always available)
/// - `FilesystemSink` (in `simplepdf-resource`): writes into a directory
pub trait DocumentSink: Debug {
    /// Stores `bytes` under `name`.
    fn store(&mut self, name: &str, bytes: &[u8], mime_type: &str) -> Result<(), SinkError>;

    /// Returns a human-readable name for this sink (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// One document received by an [`InMemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// A sink that keeps every stored document, in arrival order.
#[derive(Debug, Default)]
pub struct InMemorySink {
    documents: Vec<StoredDocument>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[StoredDocument] {
        &self.documents
    }

    /// The most recently stored document with this name.
    pub fn get(&self, name: &str) -> Option<&StoredDocument> {
        self.documents.iter().rev().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn into_documents(self) -> Vec<StoredDocument> {
        self.documents
    }
}

impl DocumentSink for InMemorySink {
    fn store(&mut self, name: &str, bytes: &[u8], mime_type: &str) -> Result<(), SinkError> {
        if name.trim().is_empty() {
            return Err(SinkError::InvalidName(name.to_string()));
        }
        self.documents.push(StoredDocument {
            name: name.to_string(),
            bytes: bytes.to_vec(),
            mime_type: mime_type.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemorySink"
    }
}
