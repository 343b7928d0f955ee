//! # Token Color Values
//!
//! Token values are kept as the string they were written in, so a theme can be
//! exported exactly as it was defined, together with the parsed
//! [peniko::Color] used for any arithmetic (alpha variants, interpolation).
//!
//! Accepted formats are the CSS color syntaxes understood by `peniko::color`:
//! `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`, `hsl()`/`hsla()`, named
//! colors and `transparent`.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use peniko::color::{parse_color, Srgb};
use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ThemeError, ThemeResult};

/// A validated color token value.
///
/// Two values are equal when their source strings are equal.
#[derive(Clone, Debug)]
pub struct ColorValue {
    raw: String,
    color: Color,
}

impl ColorValue {
    /// Parse a color string. Empty or malformed strings are rejected.
    pub fn parse(value: &str) -> ThemeResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ThemeError::invalid_color(value, "empty color value"));
        }

        let color = parse_color(trimmed)
            .map_err(|err| ThemeError::invalid_color(value, err))?
            .to_alpha_color::<Srgb>();

        Ok(Self {
            raw: trimmed.to_string(),
            color,
        })
    }

    /// Build a value from 8-bit components. The source string is the
    /// canonical lowercase hex form.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            raw: hex_string(r, g, b, a),
            color: Color::from_rgba8(r, g, b, a),
        }
    }

    /// Build an opaque value from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// The string this value was defined with.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The color as `[r, g, b, a]` bytes in sRGB.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let rgba = self.color.to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }

    /// The color in hex notation, `#rrggbb` when opaque and `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        hex_string(r, g, b, a)
    }

    /// The alpha component in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// The same color with its alpha replaced.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        let [r, g, b, _] = self.to_rgba8();
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_rgba8(r, g, b, a)
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.to_rgba8()[3] == 0
    }
}

fn hex_string(r: u8, g: u8, b: u8, a: u8) -> String {
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ColorValue {}

impl Hash for ColorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let raw = String::deserialize(deserializer)?;
        ColorValue::parse(&raw).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_formats() {
        for value in [
            "#fff",
            "#fcfcfc",
            "#00000080",
            "rgba(0,0,0,0.04)",
            "rgb(12, 34, 56)",
            "hsl(0, 0%, 99%)",
            "hsla(210, 50%, 40%, 0.5)",
            "rebeccapurple",
            "transparent",
        ] {
            assert!(ColorValue::parse(value).is_ok(), "{value} should parse");
        }
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(
            ColorValue::parse("   "),
            Err(ThemeError::InvalidColor { .. })
        ));
        assert!(ColorValue::parse("not-a-color").is_err());
        assert!(ColorValue::parse("#12345").is_err());
    }

    #[test]
    fn keeps_source_string() {
        let value = ColorValue::parse(" hsl(0, 0%, 99%) ").unwrap();
        assert_eq!(value.as_str(), "hsl(0, 0%, 99%)");
        assert_eq!(value.to_string(), "hsl(0, 0%, 99%)");
    }

    #[test]
    fn hex_round_trip_of_components() {
        let value = ColorValue::parse("#0090ff").unwrap();
        assert_eq!(value.to_rgba8(), [0x00, 0x90, 0xff, 0xff]);
        assert_eq!(value.to_hex(), "#0090ff");
    }

    #[test]
    fn with_alpha_renders_hex_with_alpha() {
        let value = ColorValue::parse("#202020").unwrap();
        let faded = value.with_alpha(0.5);
        assert_eq!(faded.as_str(), "#20202080");
        assert!((faded.alpha() - 128.0 / 255.0).abs() < 1e-3);
        assert_eq!(value.alpha(), 1.0);
        assert!(value.with_alpha(0.0).is_transparent());
        assert_eq!(value.with_alpha(3.0).as_str(), "#202020");
    }

    #[test]
    fn deserialization_validates() {
        let ok: ColorValue = serde_json::from_str("\"#abcdef\"").unwrap();
        assert_eq!(ok.as_str(), "#abcdef");
        assert!(serde_json::from_str::<ColorValue>("\"\"").is_err());
    }
}
