//! Bounding box, measurement fallback and wheel placement

use serde::{Deserialize, Serialize};

/// Point in host coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `degrees` (0° = +x, clockwise)
    pub fn polar(&self, radius: f32, degrees: f32) -> Point {
        let rad = degrees.to_radians();
        Point::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }
}

/// Drawable box handed over by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Square the wheel occupies inside this box after `padding` on every edge.
    ///
    /// Returns `None` for a box with nothing left to draw in.
    pub fn wheel_square(&self, padding: f32) -> Option<WheelSquare> {
        let width = self.width - 2.0 * padding;
        let height = self.height - 2.0 * padding;
        let side = width.min(height);
        if width.is_nan() || height.is_nan() || side <= 0.0 {
            return None;
        }
        let radius = side / 2.0;
        Some(WheelSquare {
            center: Point::new(self.x + padding + radius, self.y + padding + radius),
            radius,
        })
    }
}

/// Placement of the wheel disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSquare {
    pub center: Point,
    pub radius: f32,
}

impl WheelSquare {
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

/// Size constraint for one dimension during measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The host dictates this size
    Exact(f32),
    /// Anything up to this size ("wrap content")
    AtMost(f32),
    /// No limit at all
    Unbounded,
}

/// Resolve the size the wheel requests.
///
/// A dimension the host leaves open falls back to `default_side` rather than
/// growing to whatever is available.
pub fn measure(width: Constraint, height: Constraint, default_side: f32) -> (f32, f32) {
    let resolve = |constraint: Constraint| match constraint {
        Constraint::Exact(size) => size,
        Constraint::AtMost(_) | Constraint::Unbounded => default_side,
    };
    (resolve(width), resolve(height))
}
