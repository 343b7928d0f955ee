//! # Resolving Styles
//!
//! The read side of the interaction state: given a [Theme] and a
//! [ComponentState], pick the tokens a surface should be drawn with.

use tincture_theme::{ColorValue, Theme, ThemeToken};

use crate::group::{GroupPseudo, PseudoGroupState};
use crate::state::ComponentState;

const DISABLED_OPACITY: f32 = 0.5;

/// The interaction a surface is styled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Resting state.
    #[default]
    Default,
    /// Pointer over the surface.
    Hover,
    /// Surface pressed.
    Press,
    /// Surface focused.
    Focus,
}

impl Interaction {
    /// Pick the interaction for a component.
    ///
    /// Disabled wins over everything, then press, focus and hover.
    pub fn from_state(state: &ComponentState) -> Self {
        if state.is_disabled() {
            return Interaction::Default;
        }
        Self::from_pseudo(&state.pseudo())
    }

    /// Pick the interaction from published group flags.
    pub fn from_pseudo(pseudo: &PseudoGroupState) -> Self {
        if pseudo.get(GroupPseudo::Press) {
            Interaction::Press
        } else if pseudo.get(GroupPseudo::Focus) || pseudo.get(GroupPseudo::FocusVisible) {
            Interaction::Focus
        } else if pseudo.get(GroupPseudo::Hover) {
            Interaction::Hover
        } else {
            Interaction::Default
        }
    }
}

/// Tokens that paint a surface for one interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTokens {
    /// Fill.
    pub background: ThemeToken,
    /// Border stroke.
    pub border: ThemeToken,
    /// Foreground (text and icons).
    pub color: ThemeToken,
    /// Drop shadow.
    pub shadow: ThemeToken,
}

impl SurfaceTokens {
    /// The token set for an interaction.
    pub fn for_interaction(interaction: Interaction) -> Self {
        use ThemeToken::*;
        match interaction {
            Interaction::Default => Self {
                background: Background,
                border: BorderColor,
                color: Color,
                shadow: ShadowColor,
            },
            Interaction::Hover => Self {
                background: BackgroundHover,
                border: BorderColorHover,
                color: ColorHover,
                shadow: ShadowColorHover,
            },
            Interaction::Press => Self {
                background: BackgroundPress,
                border: BorderColorPress,
                color: ColorPress,
                shadow: ShadowColorPress,
            },
            Interaction::Focus => Self {
                background: BackgroundFocus,
                border: BorderColorFocus,
                color: ColorFocus,
                shadow: ShadowColorFocus,
            },
        }
    }
}

/// Resolved colors for drawing a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Fill.
    pub background: ColorValue,
    /// Border stroke.
    pub border: ColorValue,
    /// Foreground (text and icons).
    pub color: ColorValue,
    /// Drop shadow.
    pub shadow: ColorValue,
    /// Opacity of the whole surface.
    pub opacity: f32,
}

impl Surface {
    fn from_tokens(theme: &Theme, interaction: Interaction, disabled: bool) -> Self {
        let tokens = SurfaceTokens::for_interaction(interaction);
        Self {
            background: theme.get(tokens.background).clone(),
            border: theme.get(tokens.border).clone(),
            color: theme.get(tokens.color).clone(),
            shadow: theme.get(tokens.shadow).clone(),
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
        }
    }
}

/// Resolve a component's surface. Nothing is drawn while it is unmounted.
pub fn resolve_surface(theme: &Theme, state: &ComponentState) -> Option<Surface> {
    if state.is_unmounted() {
        return None;
    }
    Some(Surface::from_tokens(
        theme,
        Interaction::from_state(state),
        state.is_disabled(),
    ))
}

/// Resolve a component's surface from the state it observes for `group`.
pub fn resolve_group_surface(theme: &Theme, state: &ComponentState, group: &str) -> Option<Surface> {
    if state.is_unmounted() {
        return None;
    }
    let interaction = if state.is_disabled() {
        Interaction::Default
    } else {
        state
            .group_state(group)
            .and_then(|observed| observed.pseudo)
            .map(|pseudo| Interaction::from_pseudo(&pseudo))
            .unwrap_or_default()
    };
    Some(Surface::from_tokens(theme, interaction, state.is_disabled()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InteractionEvent;
    use tincture_theme::{ThemeName, ThemeRegistry};

    fn light() -> &'static Theme {
        ThemeRegistry::builtin().get(ThemeName::Light)
    }

    #[test]
    fn press_beats_focus_beats_hover() {
        let mut state = ComponentState::mounted();
        state.apply(InteractionEvent::PointerEnter);
        assert_eq!(Interaction::from_state(&state), Interaction::Hover);
        state.apply(InteractionEvent::Focus { visible: true });
        assert_eq!(Interaction::from_state(&state), Interaction::Focus);
        state.apply(InteractionEvent::PressIn);
        assert_eq!(Interaction::from_state(&state), Interaction::Press);
    }

    #[test]
    fn disabled_surface() {
        let mut state = ComponentState::mounted();
        state.apply(InteractionEvent::Focus { visible: true });
        state.apply(InteractionEvent::SetDisabled(true));

        let surface = resolve_surface(light(), &state).unwrap();
        assert_eq!(surface.opacity, 0.5);
        assert_eq!(&surface.background, light().get(ThemeToken::Background));
    }

    #[test]
    fn hover_surface() {
        let mut state = ComponentState::mounted();
        state.apply(InteractionEvent::PointerEnter);
        let surface = resolve_surface(light(), &state).unwrap();
        assert_eq!(&surface.background, light().get(ThemeToken::BackgroundHover));
        assert_eq!(&surface.shadow, light().get(ThemeToken::ShadowColorHover));
        assert_eq!(surface.opacity, 1.0);
    }

    #[test]
    fn unmounted_draws_nothing() {
        assert!(resolve_surface(light(), &ComponentState::initial()).is_none());
        assert!(resolve_surface(light(), &ComponentState::should_enter()).is_none());
    }

    #[test]
    fn unobserved_group_is_default() {
        let state = ComponentState::mounted();
        let surface = resolve_group_surface(light(), &state, "card").unwrap();
        assert_eq!(&surface.background, light().get(ThemeToken::Background));
    }
}
