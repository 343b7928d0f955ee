//! # Design-Token Sources
//!
//! A token source is a TOML or JSON document that defines every theme
//! explicitly. It is the alternative to generating the registry from the
//! built-in palettes.
//!
//! ```toml
//! [themes.light]
//! accentBackground = "#0090ff"
//! # ... every token
//!
//! [themes.light_accent]
//! extends = "light_accent"   # start from the built-in theme of that name
//! background = "#e6f4fe"     # and only override what is listed
//! ```
//!
//! A theme table without `extends` must list every token; one with `extends`
//! may list any subset. Unknown keys are errors in both cases.

use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{ThemeError, ThemeResult};
use crate::name::ThemeName;
use crate::registry::ThemeRegistry;
use crate::theme::Theme;

const EXTENDS_KEY: &str = "extends";
const INLINE_SOURCE: &str = "<inline>";

/// A parsed design-token document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSource {
    #[serde(default)]
    themes: Entries<Entries<String>>,
}

/// Table entries in document order, repeated keys included.
#[derive(Debug, Clone)]
struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries<V>, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl TokenSource {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> ThemeResult<Self> {
        toml::from_str(content).map_err(|err| ThemeError::parse_error(INLINE_SOURCE, err))
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> ThemeResult<Self> {
        serde_json::from_str(content).map_err(|err| ThemeError::parse_error(INLINE_SOURCE, err))
    }

    /// Load a `.toml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let parse: fn(&str) -> ThemeResult<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml_str,
                Some("json") => Self::from_json_str,
                _ => {
                    return Err(ThemeError::UnsupportedFormat {
                        path: path.to_path_buf(),
                    })
                },
            };

        let content = fs::read_to_string(path)?;
        log::debug!("Loading token source {:?}", path);
        parse(&content).map_err(|err| with_path(err, path))
    }

    /// Names of the themes this document defines, as written.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.0.iter().map(|(name, _)| name.as_str())
    }

    /// Build every theme and assemble them into a registry.
    pub fn into_registry(self) -> ThemeResult<ThemeRegistry> {
        let mut themes = Vec::with_capacity(self.themes.0.len());

        for (key, Entries(mut entries)) in self.themes.0 {
            let name = ThemeName::parse(&key)?;
            let extends = entries
                .iter()
                .position(|(token, _)| token == EXTENDS_KEY)
                .map(|index| entries.remove(index).1);
            let theme = match extends {
                Some(parent) => {
                    let parent = ThemeName::parse(&parent)?;
                    let base = ThemeRegistry::builtin().get(parent);
                    Theme::from_partial(name, base, entries)?
                },
                None => Theme::from_map(name, entries)?,
            };
            themes.push(theme);
        }

        ThemeRegistry::from_themes(themes)
    }
}

fn with_path(err: ThemeError, path: &Path) -> ThemeError {
    match err {
        ThemeError::ThemeParseError { details, .. } => ThemeError::ThemeParseError {
            path: PathBuf::from(path),
            details,
        },
        other => other,
    }
}
