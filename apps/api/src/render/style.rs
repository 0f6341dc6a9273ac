//! Accent colors and font pairings offered by the customize panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("invalid accent color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("unknown font pairing '{0}'")]
    UnknownFont(String),
}

/// A validated CSS hex color, stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor(String);

impl AccentColor {
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let raw = raw.trim();
        let valid = raw
            .strip_prefix('#')
            .map(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);
        if valid {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(StyleError::InvalidColor(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The color with an 8-bit alpha channel appended, e.g. `#475569` + `40`.
    pub fn with_alpha(&self, alpha_hex: &str) -> String {
        let hex = &self.0[1..];
        if hex.len() == 3 {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            format!("#{expanded}{alpha_hex}")
        } else {
            format!("{}{alpha_hex}", self.0)
        }
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(PALETTES[0].color.to_string())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccentColor {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.0
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub color: &'static str,
}

pub const PALETTES: [Palette; 8] = [
    Palette { name: "Slate", color: "#475569" },
    Palette { name: "Blue", color: "#2563eb" },
    Palette { name: "Red", color: "#dc2626" },
    Palette { name: "Green", color: "#16a34a" },
    Palette { name: "Purple", color: "#7c3aed" },
    Palette { name: "Teal", color: "#0d9488" },
    Palette { name: "Orange", color: "#ea580c" },
    Palette { name: "Indigo", color: "#4f46e5" },
];

/// Typography applied to the whole rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontPairing {
    #[default]
    Inter,
    LoraInter,
    SourceCodePro,
}

impl FontPairing {
    pub const ALL: [FontPairing; 3] = [
        FontPairing::Inter,
        FontPairing::LoraInter,
        FontPairing::SourceCodePro,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FontPairing::Inter => "inter",
            FontPairing::LoraInter => "lora-inter",
            FontPairing::SourceCodePro => "source-code-pro",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontPairing::Inter => "Inter",
            FontPairing::LoraInter => "Lora / Inter",
            FontPairing::SourceCodePro => "Source Code Pro",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FontPairing::Inter => "Modern & Clean",
            FontPairing::LoraInter => "Classic & Readable",
            FontPairing::SourceCodePro => "Technical & Sharp",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            FontPairing::Inter => "font-sans",
            FontPairing::LoraInter => "font-serif-body-sans",
            FontPairing::SourceCodePro => "font-mono",
        }
    }

    pub fn heading_family(&self) -> &'static str {
        match self {
            FontPairing::Inter => "'Inter', sans-serif",
            FontPairing::LoraInter => "'Lora', serif",
            FontPairing::SourceCodePro => "'Source Code Pro', monospace",
        }
    }

    pub fn body_family(&self) -> &'static str {
        match self {
            FontPairing::Inter | FontPairing::LoraInter => "'Inter', sans-serif",
            FontPairing::SourceCodePro => "'Source Code Pro', monospace",
        }
    }
}

impl FromStr for FontPairing {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.id() == s)
            .ok_or_else(|| StyleError::UnknownFont(s.to_string()))
    }
}

/// Serializable description of a font pairing for the customize panel.
#[derive(Debug, Serialize)]
pub struct FontPairingInfo {
    pub id: FontPairing,
    pub name: &'static str,
    pub description: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

impl From<FontPairing> for FontPairingInfo {
    fn from(font: FontPairing) -> Self {
        Self {
            id: font,
            name: font.name(),
            description: font.description(),
            heading: font.heading_family(),
            body: font.body_family(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_accepts_short_and_long_hex() {
        assert_eq!(AccentColor::parse("#ABC").unwrap().as_str(), "#abc");
        assert_eq!(AccentColor::parse(" #2563EB ").unwrap().as_str(), "#2563eb");
    }

    #[test]
    fn test_accent_color_rejects_garbage() {
        for bad in ["", "red", "#12", "#12345g", "2563eb", "#1234567"] {
            assert!(AccentColor::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_with_alpha_expands_short_form() {
        assert_eq!(AccentColor::parse("#abc").unwrap().with_alpha("40"), "#aabbcc40");
        assert_eq!(AccentColor::default().with_alpha("40"), "#47556940");
    }

    #[test]
    fn test_default_accent_is_first_palette() {
        assert_eq!(AccentColor::default().as_str(), PALETTES[0].color);
    }

    #[test]
    fn test_all_palettes_parse() {
        for palette in PALETTES {
            assert!(AccentColor::parse(palette.color).is_ok(), "{}", palette.name);
        }
    }

    #[test]
    fn test_accent_color_serde_validates() {
        let ok: AccentColor = serde_json::from_str(r##""#0d9488""##).unwrap();
        assert_eq!(ok.as_str(), "#0d9488");
        assert!(serde_json::from_str::<AccentColor>(r#""teal""#).is_err());
    }

    #[test]
    fn test_font_pairing_ids() {
        let font: FontPairing = serde_json::from_str(r#""lora-inter""#).unwrap();
        assert_eq!(font, FontPairing::LoraInter);
        assert_eq!(font.class_name(), "font-serif-body-sans");
        assert_eq!(FontPairing::default(), FontPairing::Inter);
        assert_eq!("source-code-pro".parse::<FontPairing>().unwrap(), FontPairing::SourceCodePro);
        assert!("comic-sans".parse::<FontPairing>().is_err());
    }
}
