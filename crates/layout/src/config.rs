use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use simplepdf_style::{Margins, PageSize, TextStyle};

/// Page geometry and base typography for a layout run.
///
/// Deserializes from camelCase JSON; every field is optional:
///
/// ```json
/// { "pageSize": "Letter", "margins": "36pt 54pt", "lineHeightFactor": 1.4,
///   "baseStyle": { "fontSize": 11, "color": "#333" } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Size of every page the engine creates. Defaults to A4 portrait.
    pub page_size: PageSize,
    /// Defaults to 40pt on every side.
    pub margins: Margins,
    /// A line break moves down by `font_size * line_height_factor`. Defaults to `1.2`.
    pub line_height_factor: f32,
    /// Style of the root node before any tag or inline override applies.
    pub base_style: TextStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            margins: Margins::default(),
            line_height_factor: 1.2,
            base_style: TextStyle::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self { page_size, ..self }
    }

    pub fn with_margins(self, margins: Margins) -> Self {
        Self { margins, ..self }
    }

    /// Checks that the page leaves a positive content area and that lines advance.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size.dimensions_pt();
        if !(width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "page size must be positive, got {} x {}",
                width, height
            )));
        }
        let m = &self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| *v < 0.0) {
            return Err(LayoutError::InvalidConfig(
                "margins must not be negative".to_string(),
            ));
        }
        if m.horizontal() >= width || m.vertical() >= height {
            return Err(LayoutError::InvalidConfig(format!(
                "margins leave no content area on a {} x {} page",
                width, height
            )));
        }
        if !(self.line_height_factor.is_finite() && self.line_height_factor > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "lineHeightFactor must be positive, got {}",
                self.line_height_factor
            )));
        }
        if !(self.base_style.font_size > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "base font size must be positive, got {}",
                self.base_style.font_size
            )));
        }
        Ok(())
    }
}
