use std::sync::{Arc, RwLock};

use crate::color::ColorValue;
use crate::config::ThemeConfig;
use crate::error::ThemeResult;
use crate::name::{ColorScheme, ThemeName};
use crate::registry::ThemeRegistry;
use crate::theme::Theme;
use crate::token::ThemeToken;

/// Tracks the active theme and supports runtime switching.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    registry: ThemeRegistry,
    current: ThemeName,
    generation: u64,
}

impl ThemeManager {
    /// Create a manager over the built-in registry, starting with `light`.
    pub fn new() -> Self {
        Self::with_registry(ThemeRegistry::builtin().clone(), ThemeName::Light)
    }

    /// Create a manager over a specific registry.
    pub fn with_registry(registry: ThemeRegistry, current: ThemeName) -> Self {
        Self {
            registry,
            current,
            generation: 0,
        }
    }

    /// Create a manager from a configuration.
    pub fn from_config(config: &ThemeConfig) -> ThemeResult<Self> {
        let (registry, current) = config.resolve()?;
        log::debug!("Theme manager starting with '{}'", current);
        Ok(Self::with_registry(registry, current))
    }

    /// The active theme.
    pub fn current(&self) -> &Theme {
        self.registry.get(self.current)
    }

    /// The active theme's name.
    pub fn current_name(&self) -> ThemeName {
        self.current
    }

    /// The active color scheme.
    pub fn scheme(&self) -> ColorScheme {
        self.current.scheme()
    }

    /// The registry themes are taken from.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Bumped every time the active theme changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch to another theme. Returns `true` if the active theme changed.
    pub fn switch(&mut self, name: ThemeName) -> bool {
        if self.current == name {
            return false;
        }
        log::debug!("Switching theme from '{}' to '{}'", self.current, name);
        self.current = name;
        self.generation += 1;
        true
    }

    /// Switch to a theme given by name.
    pub fn switch_by_name(&mut self, name: &str) -> ThemeResult<bool> {
        let name = ThemeName::parse(name)?;
        Ok(self.switch(name))
    }

    /// Flip between light and dark, keeping the sub-theme variant.
    pub fn toggle_scheme(&mut self) -> ThemeName {
        let next = self.current.toggled();
        self.switch(next);
        next
    }

    /// A token of the active theme.
    pub fn token(&self, token: ThemeToken) -> &ColorValue {
        self.current().get(token)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a new shared theme manager.
pub fn create_shared_theme_manager() -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new()))
}
