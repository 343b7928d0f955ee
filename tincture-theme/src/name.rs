//! # Theme Names
//!
//! The closed set of theme identifiers. Every name has exactly one theme in a
//! [ThemeRegistry](crate::registry::ThemeRegistry).
//!
//! A name is a color scheme (`light` / `dark`) optionally followed by a
//! sub-theme variant (`_accent`, `_error`, `_warning`, `_success`).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ColorScheme {
    /// The other scheme.
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Lowercase scheme name.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// The sub-theme part of a theme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// The scheme's base theme.
    #[default]
    Base,
    /// Accent sub-theme.
    Accent,
    /// Error sub-theme (red scale).
    Error,
    /// Warning sub-theme (yellow scale).
    Warning,
    /// Success sub-theme (green scale).
    Success,
}

/// A theme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ThemeName {
    /// `light`
    #[default]
    Light,
    /// `dark`
    Dark,
    /// `light_accent`
    LightAccent,
    /// `dark_accent`
    DarkAccent,
    /// `light_error`
    LightError,
    /// `light_warning`
    LightWarning,
    /// `light_success`
    LightSuccess,
    /// `dark_error`
    DarkError,
    /// `dark_warning`
    DarkWarning,
    /// `dark_success`
    DarkSuccess,
}

impl ThemeName {
    /// Number of theme names.
    pub const COUNT: usize = 10;

    /// Every theme name.
    pub const ALL: [ThemeName; ThemeName::COUNT] = [
        ThemeName::Light,
        ThemeName::Dark,
        ThemeName::LightAccent,
        ThemeName::DarkAccent,
        ThemeName::LightError,
        ThemeName::LightWarning,
        ThemeName::LightSuccess,
        ThemeName::DarkError,
        ThemeName::DarkWarning,
        ThemeName::DarkSuccess,
    ];

    /// The name as used in configuration and token sources.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::LightAccent => "light_accent",
            ThemeName::DarkAccent => "dark_accent",
            ThemeName::LightError => "light_error",
            ThemeName::LightWarning => "light_warning",
            ThemeName::LightSuccess => "light_success",
            ThemeName::DarkError => "dark_error",
            ThemeName::DarkWarning => "dark_warning",
            ThemeName::DarkSuccess => "dark_success",
        }
    }

    /// Position of this name in [ThemeName::ALL].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a theme name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(name: &str) -> Result<Self, ThemeError> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| ThemeError::not_found(name))
    }

    /// The color scheme of this theme.
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeName::Light
            | ThemeName::LightAccent
            | ThemeName::LightError
            | ThemeName::LightWarning
            | ThemeName::LightSuccess => ColorScheme::Light,
            ThemeName::Dark
            | ThemeName::DarkAccent
            | ThemeName::DarkError
            | ThemeName::DarkWarning
            | ThemeName::DarkSuccess => ColorScheme::Dark,
        }
    }

    /// The sub-theme variant of this theme.
    pub fn variant(self) -> ThemeVariant {
        match self {
            ThemeName::Light | ThemeName::Dark => ThemeVariant::Base,
            ThemeName::LightAccent | ThemeName::DarkAccent => ThemeVariant::Accent,
            ThemeName::LightError | ThemeName::DarkError => ThemeVariant::Error,
            ThemeName::LightWarning | ThemeName::DarkWarning => ThemeVariant::Warning,
            ThemeName::LightSuccess | ThemeName::DarkSuccess => ThemeVariant::Success,
        }
    }

    /// Combine a scheme and a variant into a name.
    pub fn from_parts(scheme: ColorScheme, variant: ThemeVariant) -> Self {
        match (scheme, variant) {
            (ColorScheme::Light, ThemeVariant::Base) => ThemeName::Light,
            (ColorScheme::Light, ThemeVariant::Accent) => ThemeName::LightAccent,
            (ColorScheme::Light, ThemeVariant::Error) => ThemeName::LightError,
            (ColorScheme::Light, ThemeVariant::Warning) => ThemeName::LightWarning,
            (ColorScheme::Light, ThemeVariant::Success) => ThemeName::LightSuccess,
            (ColorScheme::Dark, ThemeVariant::Base) => ThemeName::Dark,
            (ColorScheme::Dark, ThemeVariant::Accent) => ThemeName::DarkAccent,
            (ColorScheme::Dark, ThemeVariant::Error) => ThemeName::DarkError,
            (ColorScheme::Dark, ThemeVariant::Warning) => ThemeName::DarkWarning,
            (ColorScheme::Dark, ThemeVariant::Success) => ThemeName::DarkSuccess,
        }
    }

    /// The base theme a sub-theme falls back to. Base themes have no parent.
    pub fn parent(self) -> Option<Self> {
        match self.variant() {
            ThemeVariant::Base => None,
            _ => Some(Self::from_parts(self.scheme(), ThemeVariant::Base)),
        }
    }

    /// The same variant in the other scheme.
    pub fn toggled(self) -> Self {
        Self::from_parts(self.scheme().toggle(), self.variant())
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ThemeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let name = String::deserialize(deserializer)?;
        ThemeName::parse(&name).map_err(Error::custom)
    }
}
