//! Hex color parsing and serialization
//!
//! Colors are stored as packed `0xRRGGBB` values and serialized as
//! `"#RRGGBB"` strings. Accepted input forms: `#RRGGBB`, `0xRRGGBB`, and
//! bare `RRGGBB`, case-insensitive.

/// Packed RGB color value (0xRRGGBB)
pub type HexColor = u32;

/// Format a color as a display string ("#RRGGBB")
pub fn format_color(color: HexColor) -> String {
    format!("#{:06X}", color & 0xFFFFFF)
}

/// Serde module for `#[serde(with = "hex_color_serde")]` fields
pub mod hex_color_serde {
    use super::HexColor;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Parse a color string in any accepted form
    pub fn parse_color_string(s: &str) -> Result<HexColor, String> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != 6 {
            return Err(format!("expected 6 hex digits, got '{}'", s));
        }

        u32::from_str_radix(digits, 16).map_err(|_| format!("invalid hex color '{}'", s))
    }

    pub fn serialize<S>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_color(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HexColor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color_string(&s).map_err(de::Error::custom)
    }
}
