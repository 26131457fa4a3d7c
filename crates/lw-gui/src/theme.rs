//! LuckWheel color theme and styling

use iced::Color;
use lw_core::Rgb;

/// Color palette for the demo host and wheel chrome
pub struct Palette;

impl Palette {
    // Backgrounds
    pub const BG_DEEPEST: Color = Color::from_rgb(0.039, 0.039, 0.047); // #0a0a0c
    pub const BG_DEEP: Color = Color::from_rgb(0.071, 0.071, 0.086); // #121216

    // Accents
    pub const ACCENT_ORANGE: Color = Color::from_rgb(1.000, 0.565, 0.251); // #ff9040
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.251, 1.000, 0.565); // #40ff90

    // Text
    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.690, 0.690, 0.753); // #b0b0c0

    /// Fixed 12 o'clock pointer
    pub const POINTER: Color = Self::ACCENT_ORANGE;
    /// Hub disc over the wheel center
    pub const HUB: Color = Self::BG_DEEP;
}

/// Convert a core color into an iced color
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Standard sizes
pub struct Sizes;

impl Sizes {
    pub const TEXT_SMALL: f32 = 11.0;
    pub const TEXT_NORMAL: f32 = 13.0;
    pub const TEXT_HEADER: f32 = 16.0;

    /// Pointer width as a fraction of the wheel radius
    pub const POINTER_WIDTH: f32 = 0.12;
    /// Hub radius as a fraction of the wheel radius
    pub const HUB_RADIUS: f32 = 0.08;

    pub const SPACING_NORMAL: f32 = 8.0;
    pub const SPACING_LARGE: f32 = 16.0;
}
