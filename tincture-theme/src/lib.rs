#![warn(missing_docs)]

//! # Tincture Theming System
//!
//! Theme tokens and the theme registry for the tincture component system.
//!
//! ## Overview
//!
//! - **[ThemeToken](token::ThemeToken)**: the fixed set of 77 color token keys
//! - **[ThemeName](name::ThemeName)**: the closed set of theme identifiers
//! - **[Theme](theme::Theme)**: a complete, immutable token record
//! - **[ThemeRegistry](registry::ThemeRegistry)**: total mapping from name to theme
//! - **[ThemeBuilder](builder::ThemeBuilder)**: derives themes from [Palette](palette::Palette)s
//! - **[TokenSource](source::TokenSource)**: TOML/JSON design-token documents
//! - **[ThemeConfig](config::ThemeConfig)**: selection through env vars and config files
//! - **[ThemeManager](manager::ThemeManager)**: runtime theme switching
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture_theme::registry::ThemeRegistry;
//! use tincture_theme::name::ThemeName;
//! use tincture_theme::token::ThemeToken;
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.get(ThemeName::LightAccent);
//! let background = theme.get(ThemeToken::Background);
//! println!("{}", background);
//! ```

/// Contains the [builder::ThemeBuilder] struct.
pub mod builder;
/// Contains the [color::ColorValue] struct.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains theme management and runtime switching.
pub mod manager;
/// Contains the [name::ThemeName] enum.
pub mod name;
/// Contains the built-in palettes.
pub mod palette;
/// Contains the [registry::ThemeRegistry] struct.
pub mod registry;
/// Contains design-token source loading.
pub mod source;
/// Contains the [theme::Theme] struct.
pub mod theme;
/// Contains the [token::ThemeToken] enum.
pub mod token;

pub use color::ColorValue;
pub use error::{ThemeError, ThemeResult};
pub use name::{ColorScheme, ThemeName, ThemeVariant};
pub use registry::ThemeRegistry;
pub use theme::Theme;
pub use token::{ThemeToken, TokenFamily};
