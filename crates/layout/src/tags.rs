//! What each recognized tag contributes to layout.

use simplepdf_idf::Tag;
use simplepdf_style::{FontStyle, FontWeight, StyleOverride, TextDecoration};

/// Font size of a heading: `h1` is 22pt, each level below it 2pt smaller.
pub fn heading_font_size(level: u8) -> f32 {
    24.0 - 2.0 * f32::from(level)
}

/// Style a tag applies to its subtree before the element's own inline overrides.
pub fn tag_defaults(tag: Tag) -> StyleOverride {
    match tag {
        Tag::Heading(level) => StyleOverride {
            font_size: Some(heading_font_size(level)),
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        },
        Tag::Bold => StyleOverride {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        },
        Tag::Italic => StyleOverride {
            font_style: Some(FontStyle::Italic),
            ..Default::default()
        },
        Tag::Underline => StyleOverride {
            text_decoration: Some(TextDecoration::Underline),
            ..Default::default()
        },
        Tag::Paragraph | Tag::LineBreak | Tag::Container => StyleOverride::default(),
    }
}

/// Whether entering the element starts a new line, measured in the parent's style.
pub fn breaks_before(tag: Tag) -> bool {
    tag.is_block() || tag == Tag::LineBreak
}

/// Whether leaving the element starts a new line, measured in the element's own style.
pub fn breaks_after(tag: Tag) -> bool {
    tag.is_block()
}
