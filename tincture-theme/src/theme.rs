//! # Themes
//!
//! A [Theme] is a named, immutable record holding a value for every
//! [ThemeToken]. Values are stored in a fixed array indexed by token, so a
//! partial theme cannot be represented: constructors that accept untrusted
//! input ([Theme::from_map], [Theme::from_partial]) either produce a complete
//! theme or fail with a [ThemeError] naming the offending keys.
//!
//! ```rust
//! use tincture_theme::registry::ThemeRegistry;
//! use tincture_theme::name::ThemeName;
//! use tincture_theme::token::ThemeToken;
//!
//! let theme = ThemeRegistry::builtin().get(ThemeName::Dark);
//! let hover = theme.get(ThemeToken::BackgroundHover);
//! assert!(!hover.as_str().is_empty());
//! ```

use indexmap::IndexMap;
use peniko::Color;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::ColorValue;
use crate::error::{ThemeError, ThemeResult};
use crate::name::ThemeName;
use crate::token::ThemeToken;

/// A complete set of token values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: ThemeName,
    tokens: [ColorValue; ThemeToken::COUNT],
}

impl Theme {
    /// Create a theme from a value per token, in [ThemeToken::ALL] order.
    pub fn new(name: ThemeName, tokens: [ColorValue; ThemeToken::COUNT]) -> Self {
        Self { name, tokens }
    }

    /// Build a theme from `token name => color string` pairs.
    ///
    /// Every token must be present exactly once and every value must parse.
    pub fn from_map<K, V>(name: ThemeName, entries: impl IntoIterator<Item = (K, V)>) -> ThemeResult<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let slots = collect_slots(name, entries)?;
        complete(name, slots)
    }

    /// Build a theme from `base`, replacing the tokens listed in `entries`.
    pub fn from_partial<K, V>(
        name: ThemeName,
        base: &Theme,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> ThemeResult<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut slots = collect_slots(name, entries)?;
        for token in ThemeToken::ALL {
            let slot = &mut slots[token.index()];
            if slot.is_none() {
                *slot = Some(base.get(token).clone());
            }
        }
        complete(name, slots)
    }

    /// The theme's name.
    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// The value of a token.
    pub fn get(&self, token: ThemeToken) -> &ColorValue {
        &self.tokens[token.index()]
    }

    /// The parsed color of a token.
    pub fn color(&self, token: ThemeToken) -> Color {
        self.get(token).color()
    }

    /// All tokens with their values, in token order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeToken, &ColorValue)> {
        ThemeToken::ALL.into_iter().zip(self.tokens.iter())
    }

    /// `token name => color string` in token order.
    pub fn to_map(&self) -> IndexMap<&'static str, &str> {
        self.iter()
            .map(|(token, value)| (token.name(), value.as_str()))
            .collect()
    }

    /// A copy of this theme with some tokens replaced.
    pub fn with_overrides(&self, overrides: impl IntoIterator<Item = (ThemeToken, ColorValue)>) -> Self {
        let mut theme = self.clone();
        for (token, value) in overrides {
            theme.tokens[token.index()] = value;
        }
        theme
    }
}

type Slots = [Option<ColorValue>; ThemeToken::COUNT];

fn collect_slots<K, V>(name: ThemeName, entries: impl IntoIterator<Item = (K, V)>) -> ThemeResult<Slots>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut slots: Slots = std::array::from_fn(|_| None);
    let mut unknown = Vec::new();
    let mut repeated = Vec::new();

    for (key, value) in entries {
        let key = key.as_ref();
        match ThemeToken::from_name(key) {
            Some(token) => {
                let slot = &mut slots[token.index()];
                if slot.is_some() {
                    if !repeated.iter().any(|seen| seen == key) {
                        repeated.push(key.to_string());
                    }
                    continue;
                }
                *slot = Some(ColorValue::parse(value.as_ref())?);
            },
            None => unknown.push(key.to_string()),
        }
    }

    if !unknown.is_empty() {
        return Err(ThemeError::unknown_tokens(name.as_str(), unknown));
    }
    if !repeated.is_empty() {
        return Err(ThemeError::duplicate_tokens(name.as_str(), repeated));
    }
    Ok(slots)
}

fn complete(name: ThemeName, slots: Slots) -> ThemeResult<Theme> {
    let missing: Vec<String> = ThemeToken::ALL
        .into_iter()
        .filter(|token| slots[token.index()].is_none())
        .map(|token| token.name().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ThemeError::missing_tokens(name.as_str(), missing));
    }

    let values: Vec<ColorValue> = slots.into_iter().flatten().collect();
    let tokens = values
        .try_into()
        .map_err(|_: Vec<ColorValue>| ThemeError::missing_tokens(name.as_str(), Vec::new()))?;
    Ok(Theme::new(name, tokens))
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(ThemeToken::COUNT))?;
        for (token, value) in self.iter() {
            map.serialize_entry(token.name(), value.as_str())?;
        }
        map.end()
    }
}
