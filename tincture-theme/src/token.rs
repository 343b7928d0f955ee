//! # Theme Tokens
//!
//! The fixed set of color tokens every theme provides. Components refer to
//! tokens symbolically (`backgroundHover`, `color11`, `red9`, ...) and never
//! to concrete colors.
//!
//! Tokens fall into families:
//!
//! - **Accent**: `accentBackground`, `accentColor`
//! - **Shadow**: `shadowColor` plus hover/press/focus variants
//! - **Background opacity**: `background0`, `background025`, `background05`, `background075`
//! - **Ramp**: the 12-step `color1` .. `color12` scale
//! - **Color opacity**: `color0`, `color025`, `color05`, `color075`
//! - **Background / Border / Foreground**: interactive default/hover/press/focus states
//! - **Utility**: `colorTransparent`, `placeholderColor`, `outlineColor`
//! - **Green / Red / Yellow**: 12-step semantic scales for success, error and warning

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// A group of related tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFamily {
    /// Accent background and foreground.
    Accent,
    /// Shadow colors per interaction.
    Shadow,
    /// Background at fixed opacities.
    BackgroundOpacity,
    /// The 12-step base scale.
    Ramp,
    /// Foreground at fixed opacities.
    ColorOpacity,
    /// Interactive backgrounds.
    Background,
    /// Interactive borders.
    Border,
    /// Interactive foregrounds.
    Foreground,
    /// Placeholder, outline and transparent foreground.
    Utility,
    /// Success scale.
    Green,
    /// Error scale.
    Red,
    /// Warning scale.
    Yellow,
}

impl TokenFamily {
    /// All tokens of this family, in token order.
    pub fn members(self) -> impl Iterator<Item = ThemeToken> {
        ThemeToken::ALL
            .into_iter()
            .filter(move |token| token.family() == self)
    }
}

macro_rules! theme_tokens {
    ($($variant:ident => $name:literal, $family:ident;)*) => {
        /// A theme token key.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ThemeToken {
            $($variant,)*
        }

        impl ThemeToken {
            /// Every token, in declaration order.
            pub const ALL: [ThemeToken; ThemeToken::COUNT] = [$(ThemeToken::$variant,)*];

            /// The token key as written in token sources.
            pub fn name(self) -> &'static str {
                match self {
                    $(ThemeToken::$variant => $name,)*
                }
            }

            /// The family this token belongs to.
            pub fn family(self) -> TokenFamily {
                match self {
                    $(ThemeToken::$variant => TokenFamily::$family,)*
                }
            }
        }
    };
}

theme_tokens! {
    AccentBackground => "accentBackground", Accent;
    AccentColor => "accentColor", Accent;
    ShadowColor => "shadowColor", Shadow;
    ShadowColorHover => "shadowColorHover", Shadow;
    ShadowColorPress => "shadowColorPress", Shadow;
    ShadowColorFocus => "shadowColorFocus", Shadow;
    Background0 => "background0", BackgroundOpacity;
    Background025 => "background025", BackgroundOpacity;
    Background05 => "background05", BackgroundOpacity;
    Background075 => "background075", BackgroundOpacity;
    Color1 => "color1", Ramp;
    Color2 => "color2", Ramp;
    Color3 => "color3", Ramp;
    Color4 => "color4", Ramp;
    Color5 => "color5", Ramp;
    Color6 => "color6", Ramp;
    Color7 => "color7", Ramp;
    Color8 => "color8", Ramp;
    Color9 => "color9", Ramp;
    Color10 => "color10", Ramp;
    Color11 => "color11", Ramp;
    Color12 => "color12", Ramp;
    Color0 => "color0", ColorOpacity;
    Color025 => "color025", ColorOpacity;
    Color05 => "color05", ColorOpacity;
    Color075 => "color075", ColorOpacity;
    Background => "background", Background;
    BackgroundHover => "backgroundHover", Background;
    BackgroundPress => "backgroundPress", Background;
    BackgroundFocus => "backgroundFocus", Background;
    BorderColor => "borderColor", Border;
    BorderColorHover => "borderColorHover", Border;
    BorderColorPress => "borderColorPress", Border;
    BorderColorFocus => "borderColorFocus", Border;
    Color => "color", Foreground;
    ColorHover => "colorHover", Foreground;
    ColorPress => "colorPress", Foreground;
    ColorFocus => "colorFocus", Foreground;
    ColorTransparent => "colorTransparent", Utility;
    PlaceholderColor => "placeholderColor", Utility;
    OutlineColor => "outlineColor", Utility;
    Green1 => "green1", Green;
    Green2 => "green2", Green;
    Green3 => "green3", Green;
    Green4 => "green4", Green;
    Green5 => "green5", Green;
    Green6 => "green6", Green;
    Green7 => "green7", Green;
    Green8 => "green8", Green;
    Green9 => "green9", Green;
    Green10 => "green10", Green;
    Green11 => "green11", Green;
    Green12 => "green12", Green;
    Red1 => "red1", Red;
    Red2 => "red2", Red;
    Red3 => "red3", Red;
    Red4 => "red4", Red;
    Red5 => "red5", Red;
    Red6 => "red6", Red;
    Red7 => "red7", Red;
    Red8 => "red8", Red;
    Red9 => "red9", Red;
    Red10 => "red10", Red;
    Red11 => "red11", Red;
    Red12 => "red12", Red;
    Yellow1 => "yellow1", Yellow;
    Yellow2 => "yellow2", Yellow;
    Yellow3 => "yellow3", Yellow;
    Yellow4 => "yellow4", Yellow;
    Yellow5 => "yellow5", Yellow;
    Yellow6 => "yellow6", Yellow;
    Yellow7 => "yellow7", Yellow;
    Yellow8 => "yellow8", Yellow;
    Yellow9 => "yellow9", Yellow;
    Yellow10 => "yellow10", Yellow;
    Yellow11 => "yellow11", Yellow;
    Yellow12 => "yellow12", Yellow;
}

impl ThemeToken {
    /// Number of tokens in every theme.
    pub const COUNT: usize = 77;

    /// Position of this token in [ThemeToken::ALL].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a token up by its key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Step `1..=12` of the base ramp.
    pub fn ramp(step: u8) -> Option<Self> {
        Self::step_from(ThemeToken::Color1, step)
    }

    /// Step `1..=12` of the green (success) scale.
    pub fn green(step: u8) -> Option<Self> {
        Self::step_from(ThemeToken::Green1, step)
    }

    /// Step `1..=12` of the red (error) scale.
    pub fn red(step: u8) -> Option<Self> {
        Self::step_from(ThemeToken::Red1, step)
    }

    /// Step `1..=12` of the yellow (warning) scale.
    pub fn yellow(step: u8) -> Option<Self> {
        Self::step_from(ThemeToken::Yellow1, step)
    }

    fn step_from(first: ThemeToken, step: u8) -> Option<Self> {
        if (1..=12).contains(&step) {
            Some(Self::ALL[first.index() + step as usize - 1])
        } else {
            None
        }
    }
}

impl Display for ThemeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ThemeError::unknown_token(s))
    }
}

impl Serialize for ThemeToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ThemeToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(Error::custom)
    }
}
