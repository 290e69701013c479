//! Pages and the content-stream operators drawn onto them.

use crate::objects::ObjectId;
use simplepdf_types::{Color, Size};

/// One page: its MediaBox size, its drawing commands in order, and the two object slots
/// (content stream, page dictionary) reserved for it when it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub(crate) content: Vec<String>,
    pub(crate) content_id: ObjectId,
    pub(crate) page_id: ObjectId,
}

impl Page {
    pub(crate) fn new(width: f32, height: f32, content_id: ObjectId, page_id: ObjectId) -> Self {
        Self {
            width,
            height,
            content: Vec::new(),
            content_id,
            page_id,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Drawing commands, one entry per `text` or `line` operation.
    pub fn commands(&self) -> &[String] {
        &self.content
    }

    pub fn content_id(&self) -> ObjectId {
        self.content_id
    }

    pub fn page_id(&self) -> ObjectId {
        self.page_id
    }

    pub(crate) fn push(&mut self, command: String) {
        self.content.push(command);
    }

    /// The content stream: commands joined by newlines.
    pub(crate) fn stream(&self) -> String {
        self.content.join("\n")
    }
}

/// Backslash-escapes the three characters with meaning inside a PDF literal string.
pub fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes `text` and encodes it for a WinAnsiEncoding font.
///
/// Printable ASCII is kept as is. Characters with a WinAnsi code above 0x7F become octal
/// escapes; anything else becomes `?`. The result is always ASCII.
pub fn encode_pdf_text(text: &str) -> String {
    let escaped = escape_pdf_string(text);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            ' '..='~' => out.push(c),
            _ => match win_ansi_code(c) {
                Some(code) => out.push_str(&format!("\\{:03o}", code)),
                None => out.push('?'),
            },
        }
    }
    out
}

/// WinAnsi code for a non-ASCII character.
fn win_ansi_code(c: char) -> Option<u8> {
    let code = match c {
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(code)
}

pub(crate) fn text_command(
    font_alias: &str,
    font_size: f32,
    color: &Color,
    x: f32,
    y: f32,
    text: &str,
) -> String {
    [
        "BT".to_string(),
        format!("/{} {} Tf", font_alias, font_size),
        format!("{} rg", color.pdf_operands()),
        format!("{:.2} {:.2} Td", x, y),
        format!("({}) Tj", encode_pdf_text(text)),
        "ET".to_string(),
    ]
    .join(" ")
}

pub(crate) fn line_command(x1: f32, y1: f32, x2: f32, y2: f32, color: &Color) -> String {
    format!(
        "{} RG {:.2} {:.2} m {:.2} {:.2} l S",
        color.pdf_operands(),
        x1,
        y1,
        x2,
        y2
    )
}
