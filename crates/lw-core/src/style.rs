//! Wheel colors and sizing

use serde::{Deserialize, Serialize};

/// 8-bit RGB color, independent of any GUI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Palette for the wheel
pub struct WheelPalette;

impl WheelPalette {
    pub const DARK_TEAL: Rgb = Rgb::new(82, 182, 197); // #52b6c5
    pub const LIGHT_TEAL: Rgb = Rgb::new(186, 226, 232); // #bae2e8
    pub const LABEL: Rgb = Rgb::WHITE;
}

/// Visual configuration consumed by [`crate::WheelRenderer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    /// Fill of even sectors
    pub dark_color: Rgb,
    /// Fill of odd sectors
    pub light_color: Rgb,
    /// Label color
    pub text_color: Rgb,
    /// Label font size in logical pixels
    pub text_size: f32,
    /// Side requested when the host leaves a dimension unconstrained
    pub default_side: f32,
    /// Inset applied on every edge of the bounding box
    pub padding: f32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            dark_color: WheelPalette::DARK_TEAL,
            light_color: WheelPalette::LIGHT_TEAL,
            text_color: WheelPalette::LABEL,
            text_size: 16.0,
            default_side: 300.0,
            padding: 0.0,
        }
    }
}

impl WheelStyle {
    /// Fill for the sector at `index`
    pub fn sector_color(&self, index: usize) -> Rgb {
        if index % 2 == 0 {
            self.dark_color
        } else {
            self.light_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_colors() {
        let style = WheelStyle::default();
        assert_eq!(style.sector_color(0), WheelPalette::DARK_TEAL);
        assert_eq!(style.sector_color(1), WheelPalette::LIGHT_TEAL);
        assert_eq!(style.sector_color(14), WheelPalette::DARK_TEAL);
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let style: WheelStyle = serde_json::from_str(r#"{"text_size": 20.0}"#).unwrap();
        assert_eq!(style.text_size, 20.0);
        assert_eq!(style.dark_color, WheelPalette::DARK_TEAL);
        assert_eq!(style.default_side, 300.0);
    }
}
