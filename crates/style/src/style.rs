//! The inheritable text style record and the per-node overrides applied to it.

use crate::font::{FontStyle, FontWeight};
use crate::parsers::{parse_font_size, validate_font_size};
use crate::text::TextDecoration;
use serde::{de, Deserialize, Deserializer, Serialize};
use simplepdf_types::Color;

/// The resolved style of a run of text.
///
/// Styles are plain values: every node of the document tree receives its own copy, derived
/// from the parent's through [`TextStyle::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// 12pt, black, regular weight, upright, not underlined.
impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            color: Color::BLACK,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl TextStyle {
    /// Returns a new style with every property set in `overrides` replaced.
    pub fn apply(self, overrides: &StyleOverride) -> TextStyle {
        TextStyle {
            font_size: overrides.font_size.unwrap_or(self.font_size),
            color: overrides.color.unwrap_or(self.color),
            bold: overrides
                .font_weight
                .map(|w| w.is_bold())
                .unwrap_or(self.bold),
            italic: overrides
                .font_style
                .map(|s| s.is_slanted())
                .unwrap_or(self.italic),
            underline: overrides
                .text_decoration
                .map(|d| d.is_underline())
                .unwrap_or(self.underline),
        }
    }

    pub fn with_font_size(self, font_size: f32) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    pub fn with_underline(self, underline: bool) -> Self {
        Self { underline, ..self }
    }

    /// Vertical advance of one line set in this style.
    pub fn line_height(&self, factor: f32) -> f32 {
        self.font_size * factor
    }
}

/// Style properties set locally on one node. Unset properties are inherited.
#[derive(Deserialize, Serialize, Default, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "deserialize_font_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
}

impl StyleOverride {
    pub fn is_empty(&self) -> bool {
        *self == StyleOverride::default()
    }

    /// Layers `other` on top of `self`; properties set in `other` win.
    pub fn merge(&self, other: &StyleOverride) -> StyleOverride {
        StyleOverride {
            color: other.color.or(self.color),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            text_decoration: other.text_decoration.or(self.text_decoration),
        }
    }
}

/// Accepts `14`, `14.5` or a length string such as `"14px"`; the size must be positive.
fn deserialize_font_size<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FontSizeDef {
        Num(f32),
        Str(String),
    }

    match Option::<FontSizeDef>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FontSizeDef::Num(n)) => validate_font_size(n).map(Some).map_err(de::Error::custom),
        Some(FontSizeDef::Str(s)) => parse_font_size(&s).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let parent = TextStyle::default();
        let child = parent.apply(&StyleOverride {
            font_weight: Some(FontWeight::Bold),
            font_size: Some(18.0),
            ..Default::default()
        });
        assert!(child.bold);
        assert_eq!(child.font_size, 18.0);
        assert!(!parent.bold);
        assert_eq!(parent.font_size, 12.0);
    }

    #[test]
    fn test_apply_can_clear_inherited_flags() {
        let parent = TextStyle::default()
            .with_bold(true)
            .with_italic(true)
            .with_underline(true);
        let child = parent.apply(&StyleOverride {
            font_weight: Some(FontWeight::Regular),
            font_style: Some(FontStyle::Normal),
            text_decoration: Some(TextDecoration::None),
            ..Default::default()
        });
        assert!(!child.bold && !child.italic && !child.underline);
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let tag = StyleOverride {
            font_weight: Some(FontWeight::Bold),
            font_size: Some(22.0),
            ..Default::default()
        };
        let inline = StyleOverride {
            font_size: Some(30.0),
            ..Default::default()
        };
        let merged = tag.merge(&inline);
        assert_eq!(merged.font_size, Some(30.0));
        assert_eq!(merged.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn test_override_deserialize_camel_case() {
        let json = r##"{"color": "#ff0000", "fontSize": "14px", "fontWeight": "bold",
                        "fontStyle": "italic", "textDecoration": "underline"}"##;
        let o: StyleOverride = serde_json::from_str(json).unwrap();
        assert_eq!(o.color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(o.font_size, Some(14.0));
        let style = TextStyle::default().apply(&o);
        assert!(style.bold && style.italic && style.underline);
    }

    #[test]
    fn test_override_rejects_unusable_font_sizes() {
        for json in [
            r#"{"fontSize": -20}"#,
            r#"{"fontSize": 0}"#,
            r#"{"fontSize": 1e39}"#,
            r#"{"fontSize": "-3pt"}"#,
        ] {
            assert!(serde_json::from_str::<StyleOverride>(json).is_err(), "{} accepted", json);
        }
        let o: StyleOverride = serde_json::from_str(r#"{"fontSize": 9.5}"#).unwrap();
        assert_eq!(o.font_size, Some(9.5));
    }

    #[test]
    fn test_empty_override() {
        let o: StyleOverride = serde_json::from_str("{}").unwrap();
        assert!(o.is_empty());
        assert_eq!(TextStyle::default().apply(&o), TextStyle::default());
    }
}
