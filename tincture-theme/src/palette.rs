//! # Palettes
//!
//! Palettes are the design-token source the built-in themes are generated
//! from. A [Ramp] is a 12-step scale running from the app background (step 1)
//! to high-contrast text (step 12); a [Palette] bundles the ramps of one
//! color scheme.

use crate::color::ColorValue;
use crate::error::{ThemeError, ThemeResult};
use crate::name::ColorScheme;

/// A 12-step color scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    steps: [ColorValue; 12],
}

impl Ramp {
    /// Build a ramp from color strings, validating every step.
    pub fn new(steps: [&str; 12]) -> ThemeResult<Self> {
        let parsed = steps
            .iter()
            .map(|step| ColorValue::parse(step))
            .collect::<ThemeResult<Vec<_>>>()?;
        let steps = parsed
            .try_into()
            .map_err(|_: Vec<ColorValue>| ThemeError::invalid_color("ramp", "expected 12 steps"))?;
        Ok(Self { steps })
    }

    /// Build a ramp from `0xRRGGBB` literals.
    pub fn from_hex(steps: [u32; 12]) -> Self {
        Self {
            steps: steps.map(|hex| {
                ColorValue::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
            }),
        }
    }

    /// Step `1..=12`. Out-of-range steps are clamped.
    pub fn step(&self, step: u8) -> &ColorValue {
        &self.steps[step.clamp(1, 12) as usize - 1]
    }
}

/// Shadow opacities per interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStrengths {
    /// Resting shadow.
    pub base: f32,
    /// Hovered shadow.
    pub hover: f32,
    /// Pressed shadow.
    pub press: f32,
    /// Focused shadow.
    pub focus: f32,
}

/// All ramps of one color scheme.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Scheme this palette is designed for.
    pub scheme: ColorScheme,
    /// Neutral base scale.
    pub neutral: Ramp,
    /// Accent scale.
    pub accent: Ramp,
    /// Success scale.
    pub green: Ramp,
    /// Error scale.
    pub red: Ramp,
    /// Warning scale.
    pub yellow: Ramp,
    /// Shadow opacities.
    pub shadows: ShadowStrengths,
}

impl Palette {
    /// The built-in light palette.
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            neutral: Ramp::from_hex([
                0xfcfcfc, 0xf9f9f9, 0xf0f0f0, 0xe8e8e8, 0xe0e0e0, 0xd9d9d9, 0xcecece, 0xbbbbbb,
                0x8d8d8d, 0x838383, 0x646464, 0x202020,
            ]),
            accent: Ramp::from_hex([
                0xfbfdff, 0xf4faff, 0xe6f4fe, 0xd5efff, 0xc2e5ff, 0xacd8fc, 0x8ec8f6, 0x5eb1ef,
                0x0090ff, 0x0588f0, 0x0d74ce, 0x113264,
            ]),
            green: Ramp::from_hex([
                0xfbfefc, 0xf4fbf6, 0xe6f6eb, 0xd6f1df, 0xc4e8d1, 0xadddc0, 0x8eceaa, 0x5bb98b,
                0x30a46c, 0x2b9a66, 0x218358, 0x193b2d,
            ]),
            red: Ramp::from_hex([
                0xfffcfc, 0xfff7f7, 0xfeebec, 0xffdbdc, 0xffcdce, 0xfdbdbe, 0xf4a9aa, 0xeb8e90,
                0xe5484d, 0xdc3e42, 0xce2c31, 0x641723,
            ]),
            yellow: Ramp::from_hex([
                0xfdfdf9, 0xfefce9, 0xfffab8, 0xfff394, 0xffe770, 0xf3d768, 0xe4c767, 0xd5ae39,
                0xffe629, 0xffdc00, 0x9e6c00, 0x473b1f,
            ]),
            shadows: ShadowStrengths {
                base: 0.04,
                hover: 0.06,
                press: 0.08,
                focus: 0.06,
            },
        }
    }

    /// The built-in dark palette.
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            neutral: Ramp::from_hex([
                0x111111, 0x191919, 0x222222, 0x2a2a2a, 0x313131, 0x3a3a3a, 0x484848, 0x606060,
                0x6e6e6e, 0x7b7b7b, 0xb4b4b4, 0xeeeeee,
            ]),
            accent: Ramp::from_hex([
                0x0d1520, 0x111927, 0x0d2847, 0x003362, 0x004074, 0x104d87, 0x205d9e, 0x2870bd,
                0x0090ff, 0x3b9eff, 0x70b8ff, 0xc2e6ff,
            ]),
            green: Ramp::from_hex([
                0x0e1512, 0x121b17, 0x132d21, 0x113b29, 0x174933, 0x20573e, 0x28684a, 0x2f7c57,
                0x30a46c, 0x33b074, 0x3dd68c, 0xb1f1cb,
            ]),
            red: Ramp::from_hex([
                0x191111, 0x201314, 0x3b1219, 0x500f1c, 0x611623, 0x72232d, 0x8c333a, 0xb54548,
                0xe5484d, 0xec5d5e, 0xff9592, 0xffd1d9,
            ]),
            yellow: Ramp::from_hex([
                0x14120b, 0x1b180f, 0x2d2305, 0x362b00, 0x433500, 0x524202, 0x665417, 0x836a21,
                0xffe629, 0xffff57, 0xf5e147, 0xf6eeb4,
            ]),
            shadows: ShadowStrengths {
                base: 0.2,
                hover: 0.3,
                press: 0.4,
                focus: 0.3,
            },
        }
    }

    /// The built-in palette for a scheme.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}
