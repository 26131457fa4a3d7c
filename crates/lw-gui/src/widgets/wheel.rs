//! Prize wheel canvas
//!
//! ## Visual Design
//! ```text
//!            ▼            ← fixed pointer (cached layer)
//!        ╭───────╮
//!      ╱  P0 │ P1 ╲
//!     │ ─────●───── │     ← rotated wheel layer (redrawn every frame)
//!      ╲  P3 │ P2 ╱
//!        ╰───────╯
//! ```

use iced::alignment;
use iced::widget::canvas::{Cache, Canvas, Frame, Geometry, Path, Program, Text};
use iced::widget::canvas::path::Arc;
use iced::{Element, Length, Pixels, Point, Radians, Rectangle, Renderer, Theme, Vector, mouse};

use lw_core::{
    ApproxMetrics, Bounds, Constraint, GlyphPaint, LuckWheel, SectorPaint, TextMetrics,
    WheelSurface,
};

use crate::theme::{Palette, Sizes, to_color};

// ═══════════════════════════════════════════════════════════════════════════════
// SURFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// [`WheelSurface`] backed by an iced canvas frame
pub struct FrameSurface<'a> {
    frame: &'a mut Frame,
    metrics: ApproxMetrics,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self {
            frame,
            metrics: ApproxMetrics::default(),
        }
    }
}

impl TextMetrics for FrameSurface<'_> {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.metrics.text_width(text, size)
    }
}

impl WheelSurface for FrameSurface<'_> {
    fn fill_sector(&mut self, sector: &SectorPaint) {
        let center = Point::new(sector.center.x, sector.center.y);
        let path = Path::new(|builder| {
            builder.move_to(center);
            builder.arc(Arc {
                center,
                radius: sector.radius,
                start_angle: Radians(sector.start_angle.to_radians()),
                end_angle: Radians((sector.start_angle + sector.sweep_angle).to_radians()),
            });
            builder.close();
        });
        self.frame.fill(&path, to_color(sector.color));
    }

    fn draw_glyph(&mut self, glyph: &GlyphPaint) {
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(glyph.position.x, glyph.position.y));
            frame.rotate(glyph.rotation.to_radians());
            frame.fill_text(Text {
                content: glyph.ch.to_string(),
                position: Point::ORIGIN,
                color: to_color(glyph.color),
                size: Pixels(glyph.size),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Bottom,
                ..Text::default()
            });
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CANVAS PROGRAM
// ═══════════════════════════════════════════════════════════════════════════════

/// Canvas program drawing one [`LuckWheel`] at its current rotation
pub struct WheelCanvas<'a> {
    wheel: &'a LuckWheel,
    chrome: &'a Cache,
}

impl<'a> WheelCanvas<'a> {
    /// `chrome` caches the static pointer and hub; the wheel layer is redrawn every frame
    pub fn new(wheel: &'a LuckWheel, chrome: &'a Cache) -> Self {
        Self { wheel, chrome }
    }
}

impl<Message> Program<Message> for WheelCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let local = Bounds::from_size(bounds.width, bounds.height);
        let padding = self.wheel.renderer().style().padding;
        let Some(square) = local.wheel_square(padding) else {
            log::trace!("Wheel canvas too small: {}x{}", bounds.width, bounds.height);
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());
        // Rotate the whole layer about the wheel center; the wheel itself is painted unrotated
        frame.translate(Vector::new(square.center.x, square.center.y));
        frame.rotate(self.wheel.rotation().to_radians());
        frame.translate(Vector::new(-square.center.x, -square.center.y));
        {
            let mut surface = FrameSurface::new(&mut frame);
            self.wheel.render(local, &mut surface);
        }
        let wheel = frame.into_geometry();

        let chrome = self.chrome.draw(renderer, bounds.size(), |frame| {
            let center = Point::new(square.center.x, square.center.y);
            let top = center.y - square.radius;
            let half_width = square.radius * Sizes::POINTER_WIDTH / 2.0;

            let pointer = Path::new(|builder| {
                builder.move_to(Point::new(center.x - half_width, top - half_width));
                builder.line_to(Point::new(center.x + half_width, top - half_width));
                builder.line_to(Point::new(center.x, top + half_width * 1.5));
                builder.close();
            });
            frame.fill(&pointer, Palette::POINTER);
            frame.fill(
                &Path::circle(center, square.radius * Sizes::HUB_RADIUS),
                Palette::HUB,
            );
        });

        vec![wheel, chrome]
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SIZING
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolve the lengths the wheel canvas asks for.
///
/// `Shrink` falls back to the style's default side; `Fixed` is kept; `Fill`
/// lets the parent decide.
pub fn wheel_size(wheel: &LuckWheel, width: Length, height: Length) -> (Length, Length) {
    let constraint = |length: Length| match length {
        Length::Fixed(size) => Constraint::Exact(size),
        Length::Shrink => Constraint::AtMost(f32::INFINITY),
        Length::Fill | Length::FillPortion(_) => Constraint::Unbounded,
    };
    let (w, h) = wheel.measure(constraint(width), constraint(height));
    let resolve = |length: Length, size: f32| match length {
        Length::Fill | Length::FillPortion(_) => length,
        Length::Fixed(_) | Length::Shrink => Length::Fixed(size),
    };
    (resolve(width, w), resolve(height, h))
}

/// Wheel canvas element
pub fn wheel_view<'a, Message: 'a>(
    wheel: &'a LuckWheel,
    chrome: &'a Cache,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let (width, height) = wheel_size(wheel, width, height);
    Canvas::new(WheelCanvas::new(wheel, chrome))
        .width(width)
        .height(height)
        .into()
}
