use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

impl TextDecoration {
    /// Reads a `text-decoration` value. A value listing several lines (`underline overline`)
    /// counts as underlined when any of them is `underline`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let lower = s.trim().to_lowercase();
        if lower.split_whitespace().any(|part| part == "underline") {
            return Ok(TextDecoration::Underline);
        }
        match lower.as_str() {
            "none" | "" => Ok(TextDecoration::None),
            "line-through" => Ok(TextDecoration::LineThrough),
            _ => Err(format!("Invalid text decoration: '{}'", s)),
        }
    }

    pub fn is_underline(&self) -> bool {
        matches!(self, TextDecoration::Underline)
    }
}
