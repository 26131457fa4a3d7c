//! Wheel renderer - lays out sectors and arc-following labels
//!
//! The renderer always works in the wheel's unrotated frame. Rotation is the
//! host's business: it applies [`crate::SpinController::rotation`] around the
//! wheel center with its own transform before calling [`WheelRenderer::paint`].
//!
//! ## Label placement
//!
//! ```text
//!            outer arc of sector i
//!        ╭──────────────────────────╮
//!        │<- h ->  L A B E L        │   h = arc_len / 2 - text_width / 2
//!        │         (baseline at r - diameter/8)
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::{Bounds, Point, WheelSquare};
use crate::model::{SectorRange, WheelModel};
use crate::style::{Rgb, WheelStyle};

// ═══════════════════════════════════════════════════════════════════════════════
// SURFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// Text measurement supplied by the host's font stack
pub trait TextMetrics {
    /// Advance width of `text` at font size `size`
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Drawing surface the renderer paints onto
pub trait WheelSurface: TextMetrics {
    fn fill_sector(&mut self, sector: &SectorPaint);
    fn draw_glyph(&mut self, glyph: &GlyphPaint);
}

/// Fixed-advance metrics for hosts without text shaping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    /// Glyph advance as a fraction of the font size
    pub advance_ratio: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMetrics for ApproxMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FRAME
// ═══════════════════════════════════════════════════════════════════════════════

/// One filled pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPaint {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    /// Degrees, 0° = 3 o'clock, clockwise
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Rgb,
}

/// One glyph of a curved label, positioned on its baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPaint {
    pub ch: char,
    /// Baseline midpoint of the glyph
    pub position: Point,
    /// Clockwise rotation of the glyph in degrees (0 = upright)
    pub rotation: f32,
    pub size: f32,
    pub color: Rgb,
}

/// A label laid along its sector's outer arc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPaint {
    pub index: usize,
    pub text: String,
    /// Arc the text follows
    pub path: SectorRange,
    /// Distance along the arc where the text starts
    pub h_offset: f32,
    /// Inward shift from the arc
    pub v_offset: f32,
    pub glyphs: Vec<GlyphPaint>,
}

/// Everything needed to paint one unrotated wheel
#[derive(Debug, Clone, PartialEq)]
pub struct WheelFrame {
    pub square: WheelSquare,
    pub sectors: Vec<SectorPaint>,
    pub labels: Vec<LabelPaint>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERER
// ═══════════════════════════════════════════════════════════════════════════════

/// Paints a [`WheelModel`] into a bounding box
#[derive(Debug, Clone, Default)]
pub struct WheelRenderer {
    style: WheelStyle,
}

impl WheelRenderer {
    pub fn new(style: WheelStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &WheelStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut WheelStyle {
        &mut self.style
    }

    pub fn set_dark_color(&mut self, color: Rgb) {
        self.style.dark_color = color;
    }

    pub fn set_light_color(&mut self, color: Rgb) {
        self.style.light_color = color;
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.style.text_size = size.max(0.0);
    }

    /// Compute the frame for `model` inside `bounds`.
    ///
    /// `None` when there is nothing to draw (empty model or degenerate box).
    pub fn layout(
        &self,
        model: &WheelModel,
        bounds: Bounds,
        metrics: &impl TextMetrics,
    ) -> Option<WheelFrame> {
        if model.is_empty() {
            return None;
        }
        let square = bounds.wheel_square(self.style.padding)?;

        let sectors = model
            .sector_ranges()
            .enumerate()
            .map(|(index, range)| SectorPaint {
                index,
                center: square.center,
                radius: square.radius,
                start_angle: range.start,
                sweep_angle: range.sweep,
                color: self.style.sector_color(index),
            })
            .collect();

        let labels = model
            .prizes()
            .iter()
            .zip(model.sector_ranges())
            .enumerate()
            .map(|(index, (prize, range))| {
                self.layout_label(index, &prize.label, range, &square, model.len(), metrics)
            })
            .collect();

        Some(WheelFrame {
            square,
            sectors,
            labels,
        })
    }

    fn layout_label(
        &self,
        index: usize,
        text: &str,
        path: SectorRange,
        square: &WheelSquare,
        sector_count: usize,
        metrics: &impl TextMetrics,
    ) -> LabelPaint {
        let size = self.style.text_size;
        let radius = square.radius;
        let text_width = metrics.text_width(text, size);
        let arc_length = 2.0 * radius * std::f32::consts::PI / sector_count as f32;
        let h_offset = arc_length / 2.0 - text_width / 2.0;
        let v_offset = square.diameter() / 8.0;
        let baseline_radius = radius - v_offset;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut cursor = h_offset;
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let advance = metrics.text_width(ch.encode_utf8(&mut buf), size);
            // Distance along the outer arc maps to an angle; glyphs sit on the inner baseline
            let angle = path.start + ((cursor + advance / 2.0) / radius).to_degrees();
            glyphs.push(GlyphPaint {
                ch,
                position: square.center.polar(baseline_radius, angle),
                rotation: angle + 90.0,
                size,
                color: self.style.text_color,
            });
            cursor += advance;
        }

        LabelPaint {
            index,
            text: text.to_string(),
            path,
            h_offset,
            v_offset,
            glyphs,
        }
    }

    /// Paint the unrotated wheel. Returns `false` when nothing was drawn.
    pub fn paint<S: WheelSurface>(&self, model: &WheelModel, bounds: Bounds, surface: &mut S) -> bool {
        let Some(frame) = self.layout(model, bounds, &*surface) else {
            return false;
        };
        for sector in &frame.sectors {
            surface.fill_sector(sector);
        }
        for glyph in frame.labels.iter().flat_map(|label| &label.glyphs) {
            surface.draw_glyph(glyph);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::Prize;
    use crate::style::WheelPalette;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Recorder {
        sectors: Vec<SectorPaint>,
        glyphs: Vec<GlyphPaint>,
    }

    impl TextMetrics for Recorder {
        fn text_width(&self, text: &str, size: f32) -> f32 {
            ApproxMetrics::default().text_width(text, size)
        }
    }

    impl WheelSurface for Recorder {
        fn fill_sector(&mut self, sector: &SectorPaint) {
            self.sectors.push(sector.clone());
        }

        fn draw_glyph(&mut self, glyph: &GlyphPaint) {
            self.glyphs.push(glyph.clone());
        }
    }

    fn model(labels: &[&str]) -> WheelModel {
        WheelModel::new(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| Prize::new(i.to_string(), *l))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_sectors_alternate_in_order() {
        let renderer = WheelRenderer::default();
        let mut surface = Recorder::default();
        assert!(renderer.paint(&model(&["a", "b", "c", "d", "e"]), Bounds::from_size(300.0, 300.0), &mut surface));

        assert_eq!(surface.sectors.len(), 5);
        for (i, sector) in surface.sectors.iter().enumerate() {
            assert_eq!(sector.index, i);
            let expected = if i % 2 == 0 { WheelPalette::DARK_TEAL } else { WheelPalette::LIGHT_TEAL };
            assert_eq!(sector.color, expected);
            assert_relative_eq!(sector.sweep_angle, 72.0);
            assert_relative_eq!(sector.radius, 150.0);
        }
        assert_relative_eq!(surface.sectors[0].start_angle, -126.0);
        assert_relative_eq!(surface.sectors[1].start_angle, -54.0);
    }

    #[test]
    fn test_label_centered_on_sector() {
        let renderer = WheelRenderer::default();
        let model = model(&["Coupon", "Mug", "Car", "Phone"]);
        let frame = renderer
            .layout(&model, Bounds::from_size(400.0, 400.0), &ApproxMetrics::default())
            .unwrap();

        for (label, range) in frame.labels.iter().zip(model.sector_ranges()) {
            assert_eq!(label.glyphs.len(), label.text.chars().count());
            assert_relative_eq!(label.v_offset, 50.0);

            let text_width = ApproxMetrics::default().text_width(&label.text, 16.0);
            let arc = 2.0 * 200.0 * std::f32::consts::PI / 4.0;
            assert_relative_eq!(label.h_offset, arc / 2.0 - text_width / 2.0, epsilon = 1e-3);

            // First and last glyph mirror each other around the sector center
            let first = label.glyphs.first().unwrap().rotation - 90.0;
            let last = label.glyphs.last().unwrap().rotation - 90.0;
            assert_relative_eq!((first + last) / 2.0, range.center(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_glyphs_on_inner_baseline() {
        let renderer = WheelRenderer::default();
        let frame = renderer
            .layout(&model(&["WIN"]), Bounds::from_size(200.0, 200.0), &ApproxMetrics::default())
            .unwrap();
        let center = frame.square.center;
        for glyph in &frame.labels[0].glyphs {
            let dx = glyph.position.x - center.x;
            let dy = glyph.position.y - center.y;
            assert_relative_eq!((dx * dx + dy * dy).sqrt(), 75.0, epsilon = 1e-3);
            assert_eq!(glyph.color, Rgb::WHITE);
        }
        // Single sector: the label sits at the top, roughly upright
        let middle = &frame.labels[0].glyphs[1];
        assert_relative_eq!(middle.rotation, 0.0, epsilon = 1e-3);
        assert!(middle.position.y < center.y);
    }

    #[test]
    fn test_placeholder_labels_draw_nothing() {
        let renderer = WheelRenderer::default();
        let mut surface = Recorder::default();
        assert!(renderer.paint(&WheelModel::default(), Bounds::from_size(300.0, 300.0), &mut surface));
        assert_eq!(surface.sectors.len(), 16);
        assert!(surface.glyphs.is_empty());
    }

    #[test]
    fn test_degenerate_bounds_noop() {
        let renderer = WheelRenderer::default();
        let mut surface = Recorder::default();
        assert!(!renderer.paint(&model(&["a"]), Bounds::from_size(0.0, 300.0), &mut surface));
        assert!(surface.sectors.is_empty());
    }

    #[test]
    fn test_style_setters() {
        let mut renderer = WheelRenderer::default();
        renderer.set_dark_color(Rgb::new(1, 2, 3));
        renderer.set_light_color(Rgb::new(4, 5, 6));
        renderer.set_text_size(24.0);
        let frame = renderer
            .layout(&model(&["ab", "cd"]), Bounds::from_size(100.0, 100.0), &ApproxMetrics::default())
            .unwrap();
        assert_eq!(frame.sectors[0].color, Rgb::new(1, 2, 3));
        assert_eq!(frame.sectors[1].color, Rgb::new(4, 5, 6));
        assert_eq!(frame.labels[1].glyphs[0].size, 24.0);
    }
}
