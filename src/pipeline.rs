// src/pipeline.rs
//! Source text in, PDF bytes out.

use crate::error::PipelineError;
use crate::parser::{InputFormat, MarkupOptions};
use log::info;
use simplepdf_idf::Node;
use simplepdf_layout::{LayoutConfig, LayoutEngine};
use simplepdf_render::Document;
use simplepdf_style::PageSize;
use simplepdf_resource::FilesystemSink;
use simplepdf_traits::{CachedMetrics, DocumentSink, StandardMetrics, TextMetrics};
use std::fs;
use std::io::{self, Seek, Write};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`Pipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    format: InputFormat,
    config: LayoutConfig,
    metrics: Option<Arc<dyn TextMetrics>>,
    markup: MarkupOptions,
}

impl PipelineBuilder {
    /// Markup input, A4 pages with 40pt margins, built-in Helvetica metrics.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Loads a JSON [`LayoutConfig`] from a file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.config = serde_json::from_str(&source)?;
        Ok(self)
    }

    /// Replaces the built-in metrics with a host measurement service.
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_strict_styles(mut self, strict: bool) -> Self {
        self.markup.strict_styles = strict;
        self
    }

    /// Validates the configuration and creates the pipeline.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let metrics: Arc<dyn TextMetrics> = match self.metrics {
            Some(metrics) => metrics,
            None => Arc::new(CachedMetrics::new(StandardMetrics::new())),
        };
        info!(
            "Building pipeline: {:?} input, {:?} pages, metrics from {}",
            self.format,
            self.config.page_size,
            metrics.name()
        );
        let engine = LayoutEngine::with_metrics(self.config, metrics)?;
        Ok(Pipeline {
            format: self.format,
            engine,
            markup: self.markup,
        })
    }
}

/// Parses source text, lays it out and serializes the result.
#[derive(Debug, Clone)]
pub struct Pipeline {
    format: InputFormat,
    engine: LayoutEngine,
    markup: MarkupOptions,
}

impl Pipeline {
    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn parse(&self, source: &str) -> Result<Node, PipelineError> {
        Ok(self.format.parse_source(source, &self.markup)?)
    }

    /// Parses and lays out `source`, leaving the document open for further drawing.
    pub fn render_document(&self, source: &str) -> Result<Document, PipelineError> {
        let root = self.parse(source)?;
        Ok(self.engine.render(&root)?)
    }

    pub fn generate(&self, source: &str) -> Result<Vec<u8>, PipelineError> {
        Ok(self.render_document(source)?.finalize()?)
    }

    pub fn generate_to_writer<W: Write + Seek>(
        &self,
        source: &str,
        writer: &mut W,
    ) -> Result<(), PipelineError> {
        self.render_document(source)?.write_to(writer)?;
        Ok(())
    }

    /// Generates the document and hands it to `sink` under `name`.
    pub fn generate_to_sink(
        &self,
        source: &str,
        name: &str,
        sink: &mut dyn DocumentSink,
    ) -> Result<(), PipelineError> {
        let mut doc = self.render_document(source)?;
        doc.save(name, sink)?;
        info!("Generated '{}' ({} pages)", name, doc.page_count());
        Ok(())
    }

    /// Reads `input`, renders it and writes the PDF to `output`.
    pub fn generate_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<(), PipelineError> {
        let input_ref = input.as_ref();
        let source = fs::read_to_string(input_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read input from '{}': {}", input_ref.display(), e),
            ))
        })?;

        let output_ref = output.as_ref();
        let file_name = output_ref
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                PipelineError::Config(format!(
                    "Output path '{}' has no file name",
                    output_ref.display()
                ))
            })?;
        let directory = output_ref.parent().unwrap_or_else(|| Path::new(""));
        let mut sink = FilesystemSink::new(directory);
        self.generate_to_sink(&source, file_name, &mut sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use simplepdf_layout::LayoutError;
    use simplepdf_style::Margins;
    use simplepdf_traits::InMemorySink;

    #[test]
    fn test_generate_markup() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let bytes = pipeline.generate("<h1>Hi</h1><p>there</p>").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_generate_json() {
        let pipeline = PipelineBuilder::new()
            .with_format(InputFormat::Json)
            .build()
            .unwrap();
        let doc = pipeline
            .render_document(r#"{"tag": "p", "children": ["json input"]}"#)
            .unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_config_page_size_applies() {
        let config = LayoutConfig::default().with_page_size(PageSize::Letter);
        let pipeline = PipelineBuilder::new().with_config(config).build().unwrap();
        let doc = pipeline.render_document("<p>x</p>").unwrap();
        assert_eq!(doc.pages()[0].width, 612.0);
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let config = LayoutConfig::default().with_margins(Margins::all(1000.0));
        let err = PipelineBuilder::new().with_config(config).build().unwrap_err();
        assert!(matches!(err, PipelineError::Layout(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_errors_propagate() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let err = pipeline.generate("<p>").unwrap_err();
        assert!(matches!(err, PipelineError::Parse(ParseError::Markup(_))));

        let strict = PipelineBuilder::new().with_strict_styles(true).build().unwrap();
        let err = strict.generate(r#"<p style="font-size: huge">x</p>"#).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(ParseError::Style { .. })));
    }

    #[test]
    fn test_generate_to_sink() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let mut sink = InMemorySink::new();
        pipeline
            .generate_to_sink("<p>stored</p>", "out.pdf", &mut sink)
            .unwrap();
        assert_eq!(sink.get("out.pdf").unwrap().mime_type, "application/pdf");
    }
}
