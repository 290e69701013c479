//! Standard Type1 fonts shared by every page of a document.

use crate::objects::{ObjectId, ObjectStore};
use itertools::Itertools;

/// Alias, BaseFont, bold, italic. Order fixes the alias numbering.
const STANDARD_FONTS: [(&str, &str, bool, bool); 4] = [
    ("F1", "Helvetica", false, false),
    ("F2", "Helvetica-Bold", true, false),
    ("F3", "Helvetica-Oblique", false, true),
    ("F4", "Helvetica-BoldOblique", true, true),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFont {
    pub alias: &'static str,
    pub base_font: &'static str,
    pub bold: bool,
    pub italic: bool,
    pub id: ObjectId,
}

/// The four Helvetica faces of a document, keyed by weight and slant.
#[derive(Debug, Clone)]
pub struct FontRegistry {
    fonts: Vec<RegisteredFont>,
}

impl FontRegistry {
    /// Allocates one font object per standard face. Called once, from document construction.
    pub(crate) fn register_standard(store: &mut ObjectStore) -> Self {
        let fonts = STANDARD_FONTS
            .iter()
            .map(|&(alias, base_font, bold, italic)| {
                let id = store.allocate(format!(
                    "<< /Type /Font /Subtype /Type1 /Name /{} /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    alias, base_font
                ));
                RegisteredFont {
                    alias,
                    base_font,
                    bold,
                    italic,
                    id,
                }
            })
            .collect();
        Self { fonts }
    }

    pub fn alias_for(&self, bold: bool, italic: bool) -> &'static str {
        STANDARD_FONTS[usize::from(italic) * 2 + usize::from(bold)].0
    }

    pub fn fonts(&self) -> &[RegisteredFont] {
        &self.fonts
    }

    /// `<< /Font << /F1 3 0 R ... >> >>`, the resources entry of every page.
    pub fn resource_dictionary(&self) -> String {
        let entries = self
            .fonts
            .iter()
            .map(|f| format!("/{} {}", f.alias, f.id.reference()))
            .join(" ");
        format!("<< /Font << {} >> >>", entries)
    }
}
