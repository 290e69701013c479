//! simplepdf: a self-contained PDF document-assembly engine.
//!
//! The workspace is split the way the data flows:
//!
//! - `simplepdf-idf`: the generic styled document tree
//! - `simplepdf-layout`: word wrap and pagination of that tree
//! - `simplepdf-render`: the PDF object graph and its byte serializer
//! - `simplepdf-traits` / `simplepdf-resource`: text metrics and document sinks
//!
//! This crate adds the markup and JSON front ends and the [`Pipeline`] tying everything
//! together.
//!
//! ```no_run
//! use simplepdf::{InMemorySink, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let mut sink = InMemorySink::new();
//! pipeline.generate_to_sink("<h1>Hello</h1><p>World</p>", "hello.pdf", &mut sink)?;
//! # Ok::<(), simplepdf::PipelineError>(())
//! ```

pub mod error;
pub mod parser;
pub mod pipeline;

pub use error::PipelineError;
pub use parser::{parse_json, parse_markup, InputFormat, MarkupOptions, ParseError};
pub use pipeline::{Pipeline, PipelineBuilder};

pub use simplepdf_idf::{Element, Node, Tag};
pub use simplepdf_layout::{LayoutConfig, LayoutEngine, LayoutError};
pub use simplepdf_render::{Document, RenderError};
pub use simplepdf_resource::FilesystemSink;
pub use simplepdf_style::{Margins, PageSize, StyleOverride, TextStyle};
pub use simplepdf_traits::{
    CachedMetrics, DocumentSink, InMemorySink, MetricsError, SinkError, StandardMetrics,
    TextMetrics, PDF_MIME_TYPE,
};
pub use simplepdf_types::Color;
