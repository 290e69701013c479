use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::tags::{breaks_after, breaks_before, tag_defaults};
use log::{debug, trace};
use simplepdf_idf::{Element, Node};
use simplepdf_render::{Document, RenderError};
use simplepdf_style::TextStyle;
use simplepdf_traits::{StandardMetrics, TextMetrics};
use simplepdf_types::Size;
use std::sync::Arc;

/// Pen position of a layout run. `y` is the baseline of the current line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    /// Zero-based index of the page being written.
    pub page: usize,
}

/// Turns document trees into drawn pages.
///
/// The engine holds no per-document state and can lay out any number of trees.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    metrics: Arc<dyn TextMetrics>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            metrics: Arc::new(StandardMetrics::new()),
        }
    }
}

impl LayoutEngine {
    /// An engine measuring with the built-in Helvetica widths.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        Self::with_metrics(config, Arc::new(StandardMetrics::new()))
    }

    pub fn with_metrics(
        config: LayoutConfig,
        metrics: Arc<dyn TextMetrics>,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays `root` out into a fresh document that starts with one page.
    pub fn render(&self, root: &Node) -> Result<Document, LayoutError> {
        let mut doc = Document::with_metrics(Arc::clone(&self.metrics));
        doc.add_page_with(self.config.page_size);
        self.layout_into(&mut doc, root)?;
        Ok(doc)
    }

    /// Continues `doc` at the top of its current page. Pages added on overflow use the
    /// configured page size.
    pub fn layout_into(&self, doc: &mut Document, root: &Node) -> Result<Cursor, LayoutError> {
        let page_size = doc
            .current_page_size()
            .ok_or(RenderError::NoCurrentPage { operation: "layout" })?;
        let mut run = LayoutRun {
            config: &self.config,
            metrics: self.metrics.as_ref(),
            cursor: Cursor {
                x: self.config.margins.left,
                y: page_size.height - self.config.margins.top,
                page: doc.page_count() - 1,
            },
            page_size,
            doc,
        };
        run.visit(root, self.config.base_style)?;
        debug!(
            "Layout finished on page {} at ({:.2}, {:.2})",
            run.cursor.page + 1,
            run.cursor.x,
            run.cursor.y
        );
        Ok(run.cursor)
    }
}

/// State of one walk over one tree.
struct LayoutRun<'a> {
    config: &'a LayoutConfig,
    metrics: &'a dyn TextMetrics,
    doc: &'a mut Document,
    cursor: Cursor,
    page_size: Size,
}

impl LayoutRun<'_> {
    fn visit(&mut self, node: &Node, style: TextStyle) -> Result<(), LayoutError> {
        match node {
            Node::Text(text) => self.write_text(text, &style),
            Node::Element(element) => self.visit_element(element, style),
        }
    }

    fn visit_element(&mut self, element: &Element, parent: TextStyle) -> Result<(), LayoutError> {
        let tag = element.kind();
        let style = parent.apply(&tag_defaults(tag).merge(&element.style));

        if breaks_before(tag) {
            self.new_line(&parent);
        }
        for child in &element.children {
            self.visit(child, style)?;
        }
        if breaks_after(tag) {
            self.new_line(&style);
        }
        Ok(())
    }

    /// Places each whitespace-separated word, followed by one space, wrapping at the right
    /// margin. A word that alone overflows the line is placed anyway.
    fn write_text(&mut self, text: &str, style: &TextStyle) -> Result<(), LayoutError> {
        let right_edge = self.page_size.width - self.config.margins.right;
        for word in text.split_whitespace() {
            let token = format!("{} ", word);
            let width = self.metrics.measure(&token, style)?;
            if self.cursor.x + width > right_edge && self.cursor.x > self.config.margins.left {
                self.new_line(style);
            }
            self.doc.text(self.cursor.x, self.cursor.y, &token, style)?;
            trace!(
                "placed {:?} at ({:.2}, {:.2}) on page {}",
                token,
                self.cursor.x,
                self.cursor.y,
                self.cursor.page + 1
            );
            self.cursor.x += width;
        }
        Ok(())
    }

    /// Moves to the start of the next line, or to the top of a new page when the next line
    /// would fall below the bottom margin.
    fn new_line(&mut self, style: &TextStyle) {
        let margins = &self.config.margins;
        self.cursor.x = margins.left;
        self.cursor.y -= style.line_height(self.config.line_height_factor);
        if self.cursor.y < margins.bottom {
            self.cursor.page = self.doc.add_page_with(self.config.page_size);
            self.page_size = self.config.page_size.size();
            self.cursor.y = self.page_size.height - margins.top;
            debug!("Page break: continuing on page {}", self.cursor.page + 1);
        }
    }
}
