//! # Theme Error Types
//!
//! This module provides the error types for the theming system. Every failure
//! that can be caused by input (unknown names, malformed colors, partial token
//! sources) is reported through [ThemeError] instead of panicking.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Token with the specified name does not exist.
    #[error("Unknown theme token '{name}'")]
    UnknownToken {
        /// The name that did not match any token.
        name: String,
    },

    /// A token value is not a well-formed color.
    #[error("Invalid color '{value}': {details}")]
    InvalidColor {
        /// The offending value.
        value: String,
        /// Details from the color parser.
        details: String,
    },

    /// A theme definition does not provide every token.
    #[error("Theme '{theme}' is missing tokens: {}", tokens.join(", "))]
    MissingTokens {
        /// The theme being built.
        theme: String,
        /// Names of the missing tokens.
        tokens: Vec<String>,
    },

    /// A theme definition provides keys that are not tokens.
    #[error("Theme '{theme}' has unknown tokens: {}", tokens.join(", "))]
    UnknownTokens {
        /// The theme being built.
        theme: String,
        /// The unrecognized keys.
        tokens: Vec<String>,
    },

    /// A registry was built without a theme for every name.
    #[error("Registry is missing themes: {}", names.join(", "))]
    MissingThemes {
        /// Names of the missing themes.
        names: Vec<String>,
    },

    /// A theme definition sets the same token more than once.
    #[error("Theme '{theme}' sets tokens more than once: {}", tokens.join(", "))]
    DuplicateTokens {
        /// The theme being built.
        theme: String,
        /// Names of the repeated tokens.
        tokens: Vec<String>,
    },

    /// A registry was given the same theme twice.
    #[error("Theme '{name}' is defined more than once")]
    DuplicateTheme {
        /// The repeated theme name.
        name: String,
    },

    /// Theme configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration or token source file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported theme file format: {path:?} (use .toml or .json)")]
    UnsupportedFormat {
        /// The rejected path.
        path: PathBuf,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create an unknown token error.
    pub fn unknown_token(name: impl Into<String>) -> Self {
        Self::UnknownToken { name: name.into() }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: impl ToString) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details: details.to_string(),
        }
    }

    /// Create a missing tokens error.
    pub fn missing_tokens(theme: impl Into<String>, tokens: Vec<String>) -> Self {
        Self::MissingTokens {
            theme: theme.into(),
            tokens,
        }
    }

    /// Create an unknown tokens error.
    pub fn unknown_tokens(theme: impl Into<String>, tokens: Vec<String>) -> Self {
        Self::UnknownTokens {
            theme: theme.into(),
            tokens,
        }
    }

    /// Create a duplicate tokens error.
    pub fn duplicate_tokens(theme: impl Into<String>, tokens: Vec<String>) -> Self {
        Self::DuplicateTokens {
            theme: theme.into(),
            tokens,
        }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.to_string(),
        }
    }
}
