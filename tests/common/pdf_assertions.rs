#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// One `Tj` with the text state it was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub page: u32,
    pub font: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Decode every text-showing operation, page by page, in content order.
pub fn extract_text_runs(doc: &LopdfDocument) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let Ok(bytes) = doc.get_page_content(page_id) else {
            continue;
        };
        let Ok(content) = Content::decode(&bytes) else {
            continue;
        };
        let (mut font, mut size, mut x, mut y) = (String::new(), 0.0, 0.0, 0.0);
        for op in content.operations {
            match (op.operator.as_str(), op.operands.as_slice()) {
                ("Tf", [Object::Name(name), s]) => {
                    font = String::from_utf8_lossy(name).into_owned();
                    size = s.as_float().unwrap_or(0.0);
                }
                ("Td", [tx, ty]) => {
                    x = tx.as_float().unwrap_or(0.0);
                    y = ty.as_float().unwrap_or(0.0);
                }
                ("Tj", [Object::String(bytes, _)]) => runs.push(TextRun {
                    page: page_num,
                    font: font.clone(),
                    size,
                    x,
                    y,
                    // WinAnsi agrees with Latin-1 for everything the tests draw.
                    text: bytes.iter().map(|b| *b as char).collect(),
                }),
                _ => {}
            }
        }
    }
    runs
}

/// All drawn text, words concatenated in content order.
pub fn extract_text(doc: &LopdfDocument) -> String {
    extract_text_runs(doc).into_iter().map(|r| r.text).collect()
}

/// Count of stroked line segments (`S` operators) across all pages.
pub fn count_strokes(doc: &LopdfDocument) -> usize {
    doc.get_pages()
        .values()
        .filter_map(|id| doc.get_page_content(*id).ok())
        .filter_map(|bytes| Content::decode(&bytes).ok())
        .map(|c| c.operations.iter().filter(|op| op.operator == "S").count())
        .sum()
}

/// BaseFont names referenced from every page's font resources.
pub fn extract_font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Ok(resources) = page.get(b"Resources").and_then(Object::as_dict) else {
            continue;
        };
        let Ok(font_dict) = resources.get(b"Font").and_then(Object::as_dict) else {
            continue;
        };
        for (_alias, font_ref) in font_dict.iter() {
            let base_font = font_ref
                .as_reference()
                .and_then(|id| doc.get_dictionary(id))
                .and_then(|font| font.get(b"BaseFont"))
                .and_then(Object::as_name);
            if let Ok(name) = base_font {
                fonts.insert(String::from_utf8_lossy(name).into_owned());
            }
        }
    }
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
