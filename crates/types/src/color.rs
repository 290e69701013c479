use serde::{de, Deserialize, Deserializer, Serialize};

/// An opaque RGB color. PDF device RGB has no alpha channel, so none is kept here.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS named colors understood by [`Color::parse`].
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("blue", (0, 0, 255)),
    ("navy", (0, 0, 128)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("teal", (0, 128, 128)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("aqua", (0, 255, 255)),
    ("cyan", (0, 255, 255)),
    ("fuchsia", (255, 0, 255)),
    ("magenta", (255, 0, 255)),
];

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Parses a CSS color: `#RGB`, `#RRGGBB`, `rgb(r, g, b)`, `rgba(r, g, b, a)` or a
    /// basic named color.
    pub fn parse(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::parse_hex(s);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return Self::parse_rgb_function(args);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, (r, g, b))| Color::rgb(*r, *g, *b))
            .ok_or_else(|| format!("Unknown color: '{}'", s))
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let hex = &s[1..];

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }

    /// Parses the argument list of `rgb(...)`/`rgba(...)`; alpha is accepted and dropped.
    fn parse_rgb_function(args: &str) -> Result<Color, String> {
        let args = args
            .strip_suffix(')')
            .ok_or_else(|| format!("Unterminated rgb() color: '{}'", args))?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!(
                "rgb() expects 3 or 4 components, got {}",
                parts.len()
            ));
        }
        let channel = |part: &str| -> Result<u8, String> {
            part.parse::<f32>()
                .map(|v| v.round().clamp(0.0, 255.0) as u8)
                .map_err(|e| format!("Invalid color component '{}': {}", part, e))
        };
        Ok(Color {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
        })
    }

    /// The three `0..=1` operands used by the `rg`/`RG` operators, three decimals each.
    pub fn pdf_operands(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3}",
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0
        )
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
