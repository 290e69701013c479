pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use simplepdf::{InputFormat, LayoutConfig, PipelineBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The raw bytes as text. Everything the engine writes is ASCII.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF from an XHTML fragment with the default layout
pub fn generate_pdf_from_markup(markup: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_config(markup, LayoutConfig::default())
}

/// Generate a PDF from an XHTML fragment with a custom layout
pub fn generate_pdf_with_config(
    markup: &str,
    config: LayoutConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().with_config(config).build()?;
    GeneratedPdf::from_bytes(pipeline.generate(markup)?)
}

/// Generate a PDF from a JSON document tree
#[allow(dead_code)]
pub fn generate_pdf_from_json(
    tree: &serde_json::Value,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new()
        .with_format(InputFormat::Json)
        .build()?;
    GeneratedPdf::from_bytes(pipeline.generate(&serde_json::to_string(tree)?)?)
}
