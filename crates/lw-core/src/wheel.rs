//! LuckWheel - the embeddable widget core

use std::time::Duration;

use crate::config::WheelConfig;
use crate::error::{WheelError, WheelResult};
use crate::layout::{Bounds, Constraint, measure};
use crate::model::WheelModel;
use crate::prize::Prize;
use crate::render::{WheelRenderer, WheelSurface};
use crate::spin::{SpinController, SpinOutcome, SpinPlan};
use crate::style::Rgb;

/// One wheel: model, renderer style and spin controller.
///
/// Hosts call [`LuckWheel::spin`], feed frame deltas into [`LuckWheel::tick`],
/// rotate their drawing layer by [`LuckWheel::rotation`] and call
/// [`LuckWheel::render`].
#[derive(Default)]
pub struct LuckWheel {
    model: WheelModel,
    renderer: WheelRenderer,
    controller: SpinController,
}

impl LuckWheel {
    /// Blank 16-sector wheel with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &WheelConfig) -> WheelResult<Self> {
        config.validate()?;
        let model = if config.prizes.is_empty() {
            WheelModel::default()
        } else {
            WheelModel::new(config.prizes.clone())?
        };
        Ok(Self {
            model,
            renderer: WheelRenderer::new(config.style.clone()),
            controller: SpinController::with_settings(config.spin_settings()),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Replace the prizes. Rejected while a spin is in flight so the landing
    /// sector keeps matching the reported prize.
    pub fn set_prizes(&mut self, prizes: Vec<Prize>) -> WheelResult<()> {
        if self.controller.is_spinning() {
            return Err(WheelError::SpinInProgress);
        }
        self.model.set_prizes(prizes)
    }

    pub fn set_dark_color(&mut self, color: Rgb) {
        self.renderer.set_dark_color(color);
    }

    pub fn set_light_color(&mut self, color: Rgb) {
        self.renderer.set_light_color(color);
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.renderer.set_text_size(size);
    }

    pub fn set_circle_num_range(&mut self, min: u32, max: u32) -> WheelResult<()> {
        self.controller.set_circle_num_range(min, max)
    }

    pub fn set_one_circle_millis_range(&mut self, min: u64, max: u64) -> WheelResult<()> {
        self.controller.set_one_circle_millis_range(min, max)
    }

    pub fn on_spin_complete<F>(&mut self, listener: F)
    where
        F: FnMut(&SpinOutcome) + Send + 'static,
    {
        self.controller.on_spin_complete(listener);
    }

    pub fn model(&self) -> &WheelModel {
        &self.model
    }

    pub fn renderer(&self) -> &WheelRenderer {
        &self.renderer
    }

    pub fn controller(&self) -> &SpinController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SpinController {
        &mut self.controller
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // COMMANDS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn spin(&mut self, target_id: &str) -> WheelResult<SpinPlan> {
        self.controller.spin(&self.model, target_id)
    }

    pub fn tick(&mut self, dt: Duration) -> Option<SpinOutcome> {
        self.controller.tick(dt)
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.is_spinning()
    }

    /// Rotation (degrees, clockwise) the host applies around the wheel center
    pub fn rotation(&self) -> f32 {
        self.controller.rotation()
    }

    /// Sector currently under the pointer
    pub fn sector_under_pointer(&self) -> usize {
        self.model.sector_at_pointer(self.rotation())
    }

    /// Paint the unrotated wheel into `bounds`
    pub fn render<S: WheelSurface>(&self, bounds: Bounds, surface: &mut S) -> bool {
        self.renderer.paint(&self.model, bounds, surface)
    }

    /// Size the wheel asks for under the given constraints
    pub fn measure(&self, width: Constraint, height: Constraint) -> (f32, f32) {
        measure(width, height, self.renderer.style().default_side)
    }
}
