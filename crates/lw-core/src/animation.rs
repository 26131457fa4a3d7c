//! Frame-driven scalar animation

use std::time::Duration;

use crate::easing::EasingCurve;

/// Animates one value from `from` to `to` as the host feeds frame deltas.
#[derive(Debug, Clone)]
pub struct RotationAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    curve: EasingCurve,
}

impl RotationAnimation {
    pub fn new(from: f32, to: f32, duration: Duration, curve: EasingCurve) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            curve,
        }
    }

    /// Linear progress 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.curve.apply(self.progress());
        (self.from as f64 + (self.to as f64 - self.from as f64) * eased) as f32
    }

    /// Move time forward and return the new value
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
