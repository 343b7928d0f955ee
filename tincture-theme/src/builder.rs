//! # Theme Builder
//!
//! Derives complete themes from a [Palette]. Every token is filled from a
//! fixed template over the theme's base ramp:
//!
//! | token family          | source                                   |
//! |-----------------------|------------------------------------------|
//! | `color1`..`color12`   | base ramp steps 1..12                    |
//! | `background*`         | steps 1 / 2 / 3 / 2 (default/hover/press/focus) |
//! | `borderColor*`        | steps 4 / 5 / 3 / 4                      |
//! | `color*`              | steps 12 / 11 / 12 / 11                  |
//! | `background0`..`075`  | step 1 at 0, 25, 50, 75% alpha           |
//! | `color0`..`075`       | step 12 at 0, 25, 50, 75% alpha          |
//! | `shadowColor*`        | black at the palette's shadow strengths  |
//! | `green*`, `red*`, `yellow*` | the palette's semantic ramps       |
//!
//! The base ramp is the neutral ramp for `light`/`dark`, the accent ramp for
//! `_accent` themes and the red/yellow/green ramp for error/warning/success.

use crate::color::ColorValue;
use crate::name::{ThemeName, ThemeVariant};
use crate::palette::{Palette, Ramp};
use crate::theme::Theme;
use crate::token::ThemeToken;

const OPACITY_TIERS: [f32; 4] = [0.0, 0.25, 0.5, 0.75];

/// Builds one [Theme] from a palette.
#[derive(Debug, Clone)]
pub struct ThemeBuilder<'a> {
    name: ThemeName,
    palette: &'a Palette,
    overrides: Vec<(ThemeToken, ColorValue)>,
}

impl<'a> ThemeBuilder<'a> {
    /// Start building the theme `name` from `palette`.
    pub fn new(name: ThemeName, palette: &'a Palette) -> Self {
        Self {
            name,
            palette,
            overrides: Vec::new(),
        }
    }

    /// Set a token explicitly, after the template has been applied.
    pub fn with_override(mut self, token: ThemeToken, value: ColorValue) -> Self {
        self.overrides.push((token, value));
        self
    }

    fn base_ramp(&self) -> &'a Ramp {
        match self.name.variant() {
            ThemeVariant::Base => &self.palette.neutral,
            ThemeVariant::Accent => &self.palette.accent,
            ThemeVariant::Error => &self.palette.red,
            ThemeVariant::Warning => &self.palette.yellow,
            ThemeVariant::Success => &self.palette.green,
        }
    }

    fn accent_ramp(&self) -> &'a Ramp {
        match self.name.variant() {
            ThemeVariant::Accent => &self.palette.neutral,
            _ => &self.palette.accent,
        }
    }

    fn value(&self, token: ThemeToken) -> ColorValue {
        use ThemeToken::*;

        let base = self.base_ramp();
        let shadows = self.palette.shadows;
        let shadow = |alpha: f32| ColorValue::from_rgb8(0, 0, 0).with_alpha(alpha);

        match token {
            AccentBackground => self.accent_ramp().step(9).clone(),
            AccentColor => self.accent_ramp().step(12).clone(),

            ShadowColor => shadow(shadows.base),
            ShadowColorHover => shadow(shadows.hover),
            ShadowColorPress => shadow(shadows.press),
            ShadowColorFocus => shadow(shadows.focus),

            Background0 => base.step(1).with_alpha(OPACITY_TIERS[0]),
            Background025 => base.step(1).with_alpha(OPACITY_TIERS[1]),
            Background05 => base.step(1).with_alpha(OPACITY_TIERS[2]),
            Background075 => base.step(1).with_alpha(OPACITY_TIERS[3]),

            Color1 | Color2 | Color3 | Color4 | Color5 | Color6 | Color7 | Color8 | Color9
            | Color10 | Color11 | Color12 => base.step(ramp_step(token, Color1)).clone(),

            Color0 => base.step(12).with_alpha(OPACITY_TIERS[0]),
            Color025 => base.step(12).with_alpha(OPACITY_TIERS[1]),
            Color05 => base.step(12).with_alpha(OPACITY_TIERS[2]),
            Color075 => base.step(12).with_alpha(OPACITY_TIERS[3]),

            Background => base.step(1).clone(),
            BackgroundHover => base.step(2).clone(),
            BackgroundPress => base.step(3).clone(),
            BackgroundFocus => base.step(2).clone(),

            BorderColor => base.step(4).clone(),
            BorderColorHover => base.step(5).clone(),
            BorderColorPress => base.step(3).clone(),
            BorderColorFocus => base.step(4).clone(),

            Color => base.step(12).clone(),
            ColorHover => base.step(11).clone(),
            ColorPress => base.step(12).clone(),
            ColorFocus => base.step(11).clone(),

            ColorTransparent => base.step(12).with_alpha(0.0),
            PlaceholderColor => base.step(9).clone(),
            OutlineColor => base.step(12).with_alpha(0.25),

            Green1 | Green2 | Green3 | Green4 | Green5 | Green6 | Green7 | Green8 | Green9
            | Green10 | Green11 | Green12 => self.palette.green.step(ramp_step(token, Green1)).clone(),

            Red1 | Red2 | Red3 | Red4 | Red5 | Red6 | Red7 | Red8 | Red9 | Red10 | Red11
            | Red12 => self.palette.red.step(ramp_step(token, Red1)).clone(),

            Yellow1 | Yellow2 | Yellow3 | Yellow4 | Yellow5 | Yellow6 | Yellow7 | Yellow8
            | Yellow9 | Yellow10 | Yellow11 | Yellow12 => {
                self.palette.yellow.step(ramp_step(token, Yellow1)).clone()
            },
        }
    }

    /// Produce the theme.
    pub fn build(self) -> Theme {
        let tokens = ThemeToken::ALL.map(|token| self.value(token));
        Theme::new(self.name, tokens).with_overrides(self.overrides)
    }
}

fn ramp_step(token: ThemeToken, first: ThemeToken) -> u8 {
    (token.index() - first.index() + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_theme_uses_neutral_ramp() {
        let palette = Palette::light();
        let theme = ThemeBuilder::new(ThemeName::Light, &palette).build();
        assert_eq!(theme.get(ThemeToken::Color1), palette.neutral.step(1));
        assert_eq!(theme.get(ThemeToken::Color12), palette.neutral.step(12));
        assert_eq!(theme.get(ThemeToken::Background), palette.neutral.step(1));
        assert_eq!(theme.get(ThemeToken::BorderColorHover), palette.neutral.step(5));
        assert_eq!(theme.get(ThemeToken::AccentBackground), palette.accent.step(9));
    }

    #[test]
    fn error_theme_uses_red_ramp() {
        let palette = Palette::dark();
        let theme = ThemeBuilder::new(ThemeName::DarkError, &palette).build();
        assert_eq!(theme.get(ThemeToken::Color9), palette.red.step(9));
        assert_eq!(theme.get(ThemeToken::Color), palette.red.step(12));
        assert_eq!(theme.get(ThemeToken::Green4), palette.green.step(4));
    }

    #[test]
    fn accent_theme_swaps_accent_slot() {
        let palette = Palette::light();
        let theme = ThemeBuilder::new(ThemeName::LightAccent, &palette).build();
        assert_eq!(theme.get(ThemeToken::Color9), palette.accent.step(9));
        assert_eq!(theme.get(ThemeToken::AccentBackground), palette.neutral.step(9));
    }

    #[test]
    fn opacity_tiers() {
        let palette = Palette::light();
        let theme = ThemeBuilder::new(ThemeName::Light, &palette).build();
        assert!(theme.get(ThemeToken::Background0).is_transparent());
        assert!(theme.get(ThemeToken::ColorTransparent).is_transparent());
        assert_eq!(theme.get(ThemeToken::Color05).to_rgba8()[3], 128);
        assert_eq!(theme.get(ThemeToken::ShadowColorPress).as_str(), "#00000014");
    }

    #[test]
    fn overrides_win_over_template() {
        let palette = Palette::dark();
        let pink = ColorValue::parse("hotpink").unwrap();
        let theme = ThemeBuilder::new(ThemeName::Dark, &palette)
            .with_override(ThemeToken::OutlineColor, pink.clone())
            .build();
        assert_eq!(theme.get(ThemeToken::OutlineColor), &pink);
    }
}
