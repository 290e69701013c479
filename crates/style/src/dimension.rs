//! Page geometry: paper sizes and page margins, in PDF points.
use crate::parsers::parse_length_value;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use simplepdf_types::Size;

/// Page margins. Deserializes from a number (all sides), a CSS shorthand string
/// (`"20pt"`, `"20pt 40pt"`, `"10 20 30 40"`) or a map of sides, missing sides being 0.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// 40pt on every side.
impl Default for Margins {
    fn default() -> Self {
        Self::all(40.0)
    }
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self::vertical_horizontal(value, value)
    }

    pub fn vertical_horizontal(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn from_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(|part| parse_length_value(part).map_err(|e| e.to_string()))
            .collect::<Result<Vec<f32>, String>>()?;

        match values[..] {
            [all] => Ok(Self::all(all)),
            [vertical, horizontal] => Ok(Self::vertical_horizontal(vertical, horizontal)),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(format!(
                "margin shorthand takes 1, 2 or 4 lengths, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Sides {
            #[serde(default)]
            top: f32,
            #[serde(default)]
            right: f32,
            #[serde(default)]
            bottom: f32,
            #[serde(default)]
            left: f32,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Uniform(f32),
            Shorthand(String),
            Sides(Sides),
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Uniform(value) => Ok(Margins::all(value)),
            MarginsDef::Shorthand(s) => Margins::from_shorthand(&s).map_err(de::Error::custom),
            MarginsDef::Sides(s) => Ok(Margins {
                top: s.top,
                right: s.right,
                bottom: s.bottom,
                left: s.left,
            }),
        }
    }
}

/// Paper size. Named sizes are portrait.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Custom {
            width: f32,
            height: f32,
        }

        match self {
            PageSize::Custom { width, height } => Custom {
                width: *width,
                height: *height,
            }
            .serialize(serializer),
            named => serializer.serialize_str(named.name()),
        }
    }
}

impl PageSize {
    /// Portrait dimensions in points. A4 is 595.28 x 841.89.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
            PageSize::Custom { .. } => "Custom",
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions_pt();
        Size::new(width, height)
    }

    /// Case-insensitive paper name: `A4`, `Letter` or `Legal`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Named(String),
            Custom { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Named(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Custom { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
