//! Typed style properties
//!
//! Each property is an enum variant with a hardcoded default. Resolution
//! never returns "no value": if neither the exact state nor the Default
//! state carries an override, the hardcoded default applies.

use glint_core::Color;

/// Color-valued style properties
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorProp {
    BackgroundColor,
    BorderColor,
    TextColor,
    AccentColor,
}

impl ColorProp {
    pub const COUNT: usize = 4;

    pub const ALL: [ColorProp; Self::COUNT] = [
        ColorProp::BackgroundColor,
        ColorProp::BorderColor,
        ColorProp::TextColor,
        ColorProp::AccentColor,
    ];

    /// Ordinal used to index override tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Hardcoded default, the last link in the fallback chain
    pub fn default_value(self) -> Color {
        match self {
            ColorProp::BackgroundColor => Color::from_argb(0xFF202020),
            ColorProp::BorderColor => Color::from_argb(0xFF3A3A3A),
            ColorProp::TextColor => Color::WHITE,
            ColorProp::AccentColor => Color::from_argb(0xFF3B82F6),
        }
    }
}

/// Float-valued style properties
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatProp {
    CornerRadius,
    BorderThickness,
    Opacity,
    Padding,
}

impl FloatProp {
    pub const COUNT: usize = 4;

    pub const ALL: [FloatProp; Self::COUNT] = [
        FloatProp::CornerRadius,
        FloatProp::BorderThickness,
        FloatProp::Opacity,
        FloatProp::Padding,
    ];

    /// Ordinal used to index override tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Hardcoded default, the last link in the fallback chain
    pub fn default_value(self) -> f32 {
        match self {
            FloatProp::CornerRadius => 0.0,
            FloatProp::BorderThickness => 1.0,
            FloatProp::Opacity => 1.0,
            FloatProp::Padding => 4.0,
        }
    }
}
