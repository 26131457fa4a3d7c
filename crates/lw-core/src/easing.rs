//! Timing curves for the spin animation

use serde::{Deserialize, Serialize};

/// Maps linear progress (0.0 to 1.0) onto eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EasingCurve {
    Linear,
    /// Slow start, fast middle, slow finish
    #[default]
    AccelerateDecelerate,
}

impl EasingCurve {
    /// Eased progress at `t`; input is clamped to 0.0..=1.0
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::AccelerateDecelerate => {
                ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EasingCurve::Linear => "Linear",
            EasingCurve::AccelerateDecelerate => "Accelerate/Decelerate",
        }
    }
}
