#![warn(missing_docs)]

//! Theme tokens and component interaction state for cross-platform UI.

pub use peniko as color;

pub use tincture_core as core;
#[cfg(feature = "icons")]
pub use tincture_icons as icons;
pub use tincture_theme as theme;

/// A "prelude" for users of tincture.
///
/// Importing this module brings into scope the most common types
/// needed to look up themes and track component state.
///
/// ```rust
/// use tincture::prelude::*;
///
/// let theme = ThemeRegistry::builtin().get(ThemeName::Light);
/// let mut state = ComponentState::mounted();
/// state.apply(InteractionEvent::PointerEnter);
/// let surface = resolve_surface(theme, &state).unwrap();
/// assert_eq!(&surface.background, theme.get(ThemeToken::BackgroundHover));
/// ```
pub mod prelude {
    // Theme
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::manager::{SharedThemeManager, ThemeManager};
    pub use crate::theme::{
        ColorScheme, ColorValue, Theme, ThemeError, ThemeName, ThemeRegistry, ThemeToken,
        ThemeVariant,
    };

    // Interaction state
    pub use crate::core::{
        resolve_group_surface, resolve_surface, ComponentId, ComponentState, GroupPseudo,
        GroupState, Interaction, InteractionEvent, MountOptions, StateError, StateStore, Surface,
    };

    // Icons
    #[cfg(feature = "icons")]
    pub use crate::icons::{icon_by_name, Icon, IconProps};

    // Color
    pub use peniko::Color;
}
