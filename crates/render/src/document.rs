use crate::error::RenderError;
use crate::fonts::FontRegistry;
use crate::objects::{ObjectId, ObjectStore};
use crate::page::{line_command, text_command, Page};
use log::{debug, trace};
use simplepdf_style::{PageSize, TextStyle};
use simplepdf_traits::{StandardMetrics, TextMetrics};
use simplepdf_types::{Color, Size};
use std::sync::Arc;

pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

/// Reserved for the document catalog; written during finalization.
pub const CATALOG_ID: ObjectId = ObjectId::reserved(1);
/// Reserved for the page tree root; written during finalization.
pub const PAGES_ID: ObjectId = ObjectId::reserved(2);

/// A PDF under construction.
///
/// Construction reserves the catalog and page tree slots and registers the four standard
/// fonts. Pages are appended with [`Document::add_page`] and drawn on through
/// [`Document::text`] and [`Document::line`]; the most recently added page is the current
/// one. [`Document::finalize`] produces the bytes.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) objects: ObjectStore,
    pub(crate) fonts: FontRegistry,
    pub(crate) pages: Vec<Page>,
    metrics: Arc<dyn TextMetrics>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document measuring underlines with the built-in Helvetica widths.
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(StandardMetrics::new()))
    }

    pub fn with_metrics(metrics: Arc<dyn TextMetrics>) -> Self {
        let mut objects = ObjectStore::new();
        objects.allocate("");
        objects.allocate("");
        let fonts = FontRegistry::register_standard(&mut objects);
        Self {
            objects,
            fonts,
            pages: Vec::new(),
            metrics,
        }
    }

    /// Appends a raw object body and returns its id.
    pub fn add_object(&mut self, body: impl Into<String>) -> ObjectId {
        self.objects.allocate(body)
    }

    /// Starts a new A4 portrait page.
    pub fn add_page(&mut self) -> usize {
        self.add_page_sized(A4_WIDTH, A4_HEIGHT)
    }

    pub fn add_page_with(&mut self, size: PageSize) -> usize {
        let (width, height) = size.dimensions_pt();
        self.add_page_sized(width, height)
    }

    /// Starts a new page of the given size in points and makes it current. Returns its
    /// zero-based index.
    pub fn add_page_sized(&mut self, width: f32, height: f32) -> usize {
        let content_id = self.objects.allocate("");
        let page_id = self.objects.allocate("");
        self.pages.push(Page::new(width, height, content_id, page_id));
        debug!(
            "Added page {} ({} x {}), objects {} and {}",
            self.pages.len(),
            width,
            height,
            content_id,
            page_id
        );
        self.pages.len() - 1
    }

    /// Draws `text` with its baseline origin at (`x`, `y`) in the given style.
    ///
    /// An underlined style adds a stroke one point below the baseline, as wide as the
    /// measured text.
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let alias = self.fonts.alias_for(style.bold, style.italic);
        let underline = if style.underline {
            let width = self.metrics.measure(text, style)?;
            Some(line_command(x, y - 1.0, x + width, y - 1.0, &style.color))
        } else {
            None
        };

        let page = self.current_page_mut("text")?;
        page.push(text_command(alias, style.font_size, &style.color, x, y, text));
        if let Some(command) = underline {
            page.push(command);
        }
        trace!("text {:?} at ({:.2}, {:.2}) in {}", text, x, y, alias);
        Ok(())
    }

    /// Strokes a straight line in `color`.
    pub fn line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.current_page_mut("line")?.push(line_command(x1, y1, x2, y2, color));
        Ok(())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    pub fn current_page_size(&self) -> Option<Size> {
        self.current_page().map(Page::size)
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn metrics(&self) -> &Arc<dyn TextMetrics> {
        &self.metrics
    }

    fn current_page_mut(&mut self, operation: &'static str) -> Result<&mut Page, RenderError> {
        self.pages
            .last_mut()
            .ok_or(RenderError::NoCurrentPage { operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplepdf_traits::MetricsError;

    #[derive(Debug)]
    struct BrokenMetrics;

    impl TextMetrics for BrokenMetrics {
        fn measure_advance(
            &self,
            _: &str,
            _: &str,
            _: f32,
            _: bool,
            _: bool,
        ) -> Result<f32, MetricsError> {
            Err(MetricsError::Unavailable("offline".into()))
        }

        fn name(&self) -> &'static str {
            "BrokenMetrics"
        }
    }

    #[test]
    fn test_construction_reserves_catalog_pages_and_fonts() {
        let doc = Document::new();
        assert_eq!(doc.objects().len(), 6);
        assert_eq!(doc.objects().get(CATALOG_ID), Some(""));
        assert_eq!(doc.objects().get(PAGES_ID), Some(""));
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_add_page_allocates_two_placeholders() {
        let mut doc = Document::new();
        assert_eq!(doc.add_page(), 0);
        assert_eq!(doc.add_page_with(PageSize::Letter), 1);
        let pages = doc.pages();
        assert_eq!(pages[0].content_id().number(), 7);
        assert_eq!(pages[0].page_id().number(), 8);
        assert_eq!(pages[1].content_id().number(), 9);
        assert_eq!(doc.current_page_size(), Some(Size::new(612.0, 792.0)));
    }

    #[test]
    fn test_drawing_without_page_fails() {
        let mut doc = Document::new();
        let err = doc.text(10.0, 10.0, "x", &TextStyle::default()).unwrap_err();
        assert!(matches!(err, RenderError::NoCurrentPage { operation: "text" }));
        let err = doc.line(0.0, 0.0, 1.0, 1.0, &Color::BLACK).unwrap_err();
        assert!(matches!(err, RenderError::NoCurrentPage { operation: "line" }));
    }

    #[test]
    fn test_text_selects_font_by_style() {
        let mut doc = Document::new();
        doc.add_page();
        let style = TextStyle::default().with_bold(true).with_italic(true);
        doc.text(40.0, 800.0, "Hi", &style).unwrap();
        let commands = doc.current_page().unwrap().commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("BT /F4 12 Tf"));
    }

    #[test]
    fn test_underline_adds_measured_stroke() {
        let mut doc = Document::new();
        doc.add_page();
        let style = TextStyle::default().with_underline(true);
        // "one " measures 23.352pt at 12pt.
        doc.text(40.0, 100.0, "one ", &style).unwrap();
        let commands = doc.current_page().unwrap().commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1], "0.000 0.000 0.000 RG 40.00 99.00 m 63.35 99.00 l S");
    }

    #[test]
    fn test_underline_with_failing_metrics() {
        let mut doc = Document::with_metrics(Arc::new(BrokenMetrics));
        doc.add_page();
        let plain = doc.text(0.0, 0.0, "ok", &TextStyle::default());
        assert!(plain.is_ok());
        let err = doc
            .text(0.0, 0.0, "x", &TextStyle::default().with_underline(true))
            .unwrap_err();
        assert!(matches!(err, RenderError::Metrics(MetricsError::Unavailable(_))));
        assert_eq!(doc.current_page().unwrap().commands().len(), 1);
    }
}
