//! PDF document assembly.
//!
//! A [`Document`] accumulates pages and drawing commands into an indexed object store and
//! serializes it into PDF 1.4 bytes: header, numbered objects, cross-reference table and
//! trailer.
//!
//! - [`ObjectStore`]: dense, 1-based object arena with placeholder slots
//! - [`FontRegistry`]: the four standard Helvetica faces, registered once per document
//! - [`Page`]: page geometry and its drawing commands
//! - [`Document::finalize`]: the serializer

mod document;
mod error;
pub mod fonts;
pub mod objects;
pub mod page;
mod writer;

pub use document::{Document, A4_HEIGHT, A4_WIDTH, CATALOG_ID, PAGES_ID};
pub use error::RenderError;
pub use fonts::{FontRegistry, RegisteredFont};
pub use objects::{ObjectId, ObjectStore};
pub use page::{encode_pdf_text, escape_pdf_string, Page};
pub use writer::DEFAULT_FILENAME;
