//! # Theme Configuration System
//!
//! This module selects the active theme and the registry it comes from,
//! through environment variables, a TOML configuration file, or code.
//!
//! ## Environment Variables
//!
//! - `TINCTURE_THEME`: the default theme (`light`, `dark_error`, ...)
//! - `TINCTURE_THEME_FALLBACK`: theme used when the default cannot be loaded
//! - `TINCTURE_THEME_CONFIG`: path to a TOML configuration file
//!
//! Variables override values read from the configuration file. Invalid values
//! are logged and ignored.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "dark"
//! fallback = "light"
//! tokens = "./tokens.toml"   # optional design-token source, relative to this file
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tincture_theme::config::ThemeConfig;
//! use tincture_theme::name::ThemeName;
//!
//! let config = ThemeConfig::new().with_default_theme(ThemeName::Dark);
//! let theme = config.resolve_theme().unwrap();
//! assert_eq!(theme.name(), ThemeName::Dark);
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::name::ThemeName;
use crate::registry::ThemeRegistry;
use crate::source::TokenSource;
use crate::theme::Theme;

/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "TINCTURE_THEME";
/// Environment variable naming the fallback theme.
pub const FALLBACK_ENV: &str = "TINCTURE_THEME_FALLBACK";
/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "TINCTURE_THEME_CONFIG";

/// Which theme to use and where themes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The theme to activate.
    pub default_theme: ThemeName,
    /// The theme to activate when the configured registry cannot be loaded.
    pub fallback_theme: Option<ThemeName>,
    /// Design-token source replacing the built-in themes.
    pub token_source: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    default: Option<ThemeName>,
    fallback: Option<ThemeName>,
    tokens: Option<PathBuf>,
}

impl ThemeConfig {
    /// Default settings: `light`, falling back to `dark`, built-in themes.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeName::Light,
            fallback_theme: Some(ThemeName::Dark),
            token_source: None,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env_or_default() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup(CONFIG_ENV) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring {}={}: {}", CONFIG_ENV, path, err),
            }
        }

        if let Some(value) = lookup(THEME_ENV) {
            match ThemeName::parse(&value) {
                Ok(name) => config.default_theme = name,
                Err(err) => log::warn!("Ignoring {}: {}", THEME_ENV, err),
            }
        }

        if let Some(value) = lookup(FALLBACK_ENV) {
            match ThemeName::parse(&value) {
                Ok(name) => config.fallback_theme = Some(name),
                Err(err) => log::warn!("Ignoring {}: {}", FALLBACK_ENV, err),
            }
        }

        config
    }

    /// Load a TOML configuration file. A relative `tokens` path is resolved
    /// against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let mut config = Self::parse_toml(&content).map_err(|err| ThemeError::parse_error(path, err))?;

        if let (Some(tokens), Some(dir)) = (config.token_source.as_mut(), path.parent()) {
            if tokens.is_relative() {
                *tokens = dir.join(&*tokens);
            }
        }
        Ok(config)
    }

    /// Parse TOML configuration content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse_toml(content).map_err(|err| ThemeError::parse_error("<inline>", err))
    }

    fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::new();
        Ok(Self {
            default_theme: file.theme.default.unwrap_or(defaults.default_theme),
            fallback_theme: file.theme.fallback.or(defaults.fallback_theme),
            token_source: file.theme.tokens,
        })
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, theme: ThemeName) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme.
    pub fn with_fallback_theme(mut self, theme: ThemeName) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Use a design-token source instead of the built-in themes.
    pub fn with_token_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_source = Some(path.into());
        self
    }

    /// Load the registry this configuration points at.
    pub fn load_registry(&self) -> ThemeResult<ThemeRegistry> {
        match &self.token_source {
            Some(path) => TokenSource::from_file(path)?.into_registry(),
            None => Ok(ThemeRegistry::builtin().clone()),
        }
    }

    /// Load the registry and pick the active theme name.
    ///
    /// When the token source fails to load and a fallback is configured, the
    /// built-in registry is used with the fallback theme.
    pub fn resolve(&self) -> ThemeResult<(ThemeRegistry, ThemeName)> {
        match self.load_registry() {
            Ok(registry) => Ok((registry, self.default_theme)),
            Err(err) => match self.fallback_theme {
                Some(fallback) => {
                    log::warn!(
                        "Failed to load themes ({}), falling back to built-in '{}'",
                        err,
                        fallback
                    );
                    Ok((ThemeRegistry::builtin().clone(), fallback))
                },
                None => Err(err),
            },
        }
    }

    /// Resolve the active theme.
    pub fn resolve_theme(&self) -> ThemeResult<Theme> {
        let (registry, name) = self.resolve()?;
        Ok(registry.get(name).clone())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
