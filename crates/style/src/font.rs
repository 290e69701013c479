//! Font weight and slant as written in style declarations. Only two weights and two
//! slants are rendered, so both types collapse to a flag at layout time.
use serde::{de, Deserialize, Deserializer, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// CSS weight on the 100-900 scale.
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Semi-bold (600) and heavier select the bold face.
    pub fn is_bold(&self) -> bool {
        self.value() >= 600
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_ascii_lowercase();
        let weight = match keyword.as_str() {
            "thin" => FontWeight::Thin,
            "light" | "lighter" => FontWeight::Light,
            "normal" | "regular" => FontWeight::Regular,
            "medium" => FontWeight::Medium,
            "bold" | "bolder" => FontWeight::Bold,
            "black" => FontWeight::Black,
            numeric => match numeric.parse::<u16>() {
                Ok(n) if (1..=1000).contains(&n) => FontWeight::Numeric(n),
                _ => return Err(format!("Invalid font weight: '{}'", s)),
            },
        };
        Ok(weight)
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(FontWeight::Numeric(n)),
            Raw::Keyword(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Italic and oblique share the one slanted face.
    pub fn is_slanted(&self) -> bool {
        *self != FontStyle::Normal
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique),
            _ => Err(format!("Invalid font style: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_boldness_threshold() {
        assert!(FontWeight::Bold.is_bold());
        assert!(FontWeight::Numeric(600).is_bold());
        assert!(!FontWeight::Numeric(500).is_bold());
        assert!(!FontWeight::Regular.is_bold());
    }

    #[test]
    fn test_weight_from_str() {
        assert_eq!("BOLD".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert_eq!("normal".parse::<FontWeight>().unwrap(), FontWeight::Regular);
        assert_eq!(" 800 ".parse::<FontWeight>().unwrap(), FontWeight::Numeric(800));
        assert!("heavy-ish".parse::<FontWeight>().is_err());
        assert!("0".parse::<FontWeight>().is_err());
    }

    #[test]
    fn test_weight_deserialize_number_or_keyword() {
        let w: FontWeight = serde_json::from_str("700").unwrap();
        assert!(w.is_bold());
        let w: FontWeight = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(w, FontWeight::Light);
    }

    #[test]
    fn test_style_from_str() {
        assert!("Italic".parse::<FontStyle>().unwrap().is_slanted());
        assert!("oblique".parse::<FontStyle>().unwrap().is_slanted());
        assert!(!"normal".parse::<FontStyle>().unwrap().is_slanted());
        assert!("slanted".parse::<FontStyle>().is_err());
    }
}
