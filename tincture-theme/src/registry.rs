//! # Theme Registry
//!
//! The registry is the total mapping from [ThemeName] to [Theme]. It is
//! constructed once, either generated from palettes or loaded from a
//! [TokenSource](crate::source::TokenSource), and is read-only afterwards.
//! Looking a theme up by [ThemeName] cannot fail; looking it up by string
//! fails only for names outside the closed set.
//!
//! ```rust
//! use tincture_theme::registry::ThemeRegistry;
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.lookup("dark_success").unwrap();
//! assert_eq!(theme.name().as_str(), "dark_success");
//! assert!(registry.lookup("sepia").is_err());
//! ```

use std::sync::OnceLock;

use crate::builder::ThemeBuilder;
use crate::color::ColorValue;
use crate::error::{ThemeError, ThemeResult};
use crate::name::{ColorScheme, ThemeName};
use crate::palette::Palette;
use crate::theme::Theme;

static BUILTIN: OnceLock<ThemeRegistry> = OnceLock::new();

/// Every theme, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: [Theme; ThemeName::COUNT],
}

impl ThemeRegistry {
    /// The registry generated from the built-in palettes.
    pub fn builtin() -> &'static ThemeRegistry {
        BUILTIN.get_or_init(|| {
            log::debug!("Generating built-in theme registry");
            Self::generate(&Palette::light(), &Palette::dark())
        })
    }

    /// Generate every theme from a light and a dark palette.
    pub fn generate(light: &Palette, dark: &Palette) -> Self {
        let themes = ThemeName::ALL.map(|name| {
            let palette = match name.scheme() {
                ColorScheme::Light => light,
                ColorScheme::Dark => dark,
            };
            ThemeBuilder::new(name, palette).build()
        });
        Self { themes }
    }

    /// Build a registry from explicit themes. Every name must appear exactly once.
    pub fn from_themes(themes: impl IntoIterator<Item = Theme>) -> ThemeResult<Self> {
        let mut slots: [Option<Theme>; ThemeName::COUNT] = std::array::from_fn(|_| None);

        for theme in themes {
            let slot = &mut slots[theme.name().index()];
            if slot.is_some() {
                return Err(ThemeError::DuplicateTheme {
                    name: theme.name().to_string(),
                });
            }
            *slot = Some(theme);
        }

        let missing: Vec<String> = ThemeName::ALL
            .into_iter()
            .filter(|name| slots[name.index()].is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ThemeError::MissingThemes { names: missing });
        }

        let themes: Vec<Theme> = slots.into_iter().flatten().collect();
        let themes = themes
            .try_into()
            .map_err(|_: Vec<Theme>| ThemeError::MissingThemes { names: Vec::new() })?;
        Ok(Self { themes })
    }

    /// The theme for `name`.
    pub fn get(&self, name: ThemeName) -> &Theme {
        &self.themes[name.index()]
    }

    /// The theme for a name given as a string.
    pub fn lookup(&self, name: &str) -> ThemeResult<&Theme> {
        Ok(self.get(ThemeName::parse(name)?))
    }

    /// All theme names, in registry order.
    pub fn names(&self) -> impl Iterator<Item = ThemeName> {
        ThemeName::ALL.into_iter()
    }

    /// All themes, in registry order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Theme> + ExactSizeIterator {
        self.themes.iter()
    }

    /// Re-check every stored value: non-empty and parseable.
    pub fn validate(&self) -> ThemeResult<()> {
        for theme in self.iter() {
            for (_, value) in theme.iter() {
                ColorValue::parse(value.as_str())?;
            }
        }
        Ok(())
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ThemeToken;

    #[test]
    fn builtin_is_total() {
        let registry = ThemeRegistry::builtin();
        for name in ThemeName::ALL {
            let theme = registry.get(name);
            assert_eq!(theme.name(), name);
            assert_eq!(theme.iter().count(), ThemeToken::COUNT);
        }
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn names_follow_themes() {
        let registry = ThemeRegistry::builtin();
        let names: Vec<ThemeName> = registry.names().collect();
        let theme_names: Vec<ThemeName> = registry.iter().map(Theme::name).collect();
        assert_eq!(names, theme_names);
        assert_eq!(registry.iter().len(), ThemeName::COUNT);
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(ThemeRegistry::builtin(), ThemeRegistry::builtin()));
    }

    #[test]
    fn from_themes_reports_missing_names() {
        let registry = ThemeRegistry::builtin();
        let partial = registry
            .iter()
            .filter(|theme| theme.name() != ThemeName::DarkWarning)
            .cloned();
        match ThemeRegistry::from_themes(partial) {
            Err(ThemeError::MissingThemes { names }) => assert_eq!(names, vec!["dark_warning"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn from_themes_rejects_duplicates() {
        let registry = ThemeRegistry::builtin();
        let mut themes: Vec<Theme> = registry.iter().cloned().collect();
        themes.push(registry.get(ThemeName::Light).clone());
        assert!(matches!(
            ThemeRegistry::from_themes(themes),
            Err(ThemeError::DuplicateTheme { .. })
        ));
    }

    #[test]
    fn from_themes_accepts_any_order() {
        let registry = ThemeRegistry::builtin();
        let reversed: Vec<Theme> = registry.iter().rev().cloned().collect();
        let rebuilt = ThemeRegistry::from_themes(reversed).unwrap();
        assert_eq!(&rebuilt, registry);
    }
}
