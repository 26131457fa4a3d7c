//! Spin controller - plans a randomized spin that lands on a chosen prize
//!
//! A spin is a whole number of revolutions followed by the alignment that
//! puts the target sector under the 12 o'clock pointer. The number of
//! revolutions and the time per revolution are drawn at random; the landing
//! sector never is.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::animation::RotationAnimation;
use crate::easing::EasingCurve;
use crate::error::{WheelError, WheelResult};
use crate::model::WheelModel;
use crate::prize::Prize;

// ═══════════════════════════════════════════════════════════════════════════════
// SETTINGS
// ═══════════════════════════════════════════════════════════════════════════════

/// Inclusive `min..=max` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> SpinRange<T>
where
    T: PartialOrd + Copy + Into<u64>,
{
    /// Build a range, rejecting `min > max`
    pub fn new(min: T, max: T) -> WheelResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> WheelResult<()> {
        if self.min > self.max {
            return Err(WheelError::InvalidRange {
                min: self.min.into(),
                max: self.max.into(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Named spin presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpinProfile {
    /// Long, dramatic spin
    #[default]
    Normal,
    /// Short spin for repeated draws
    Turbo,
    /// Near-instant spin for testing
    Studio,
}

/// Randomization bounds for a spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    /// Whole revolutions before settling
    pub circle_num: SpinRange<u32>,
    /// Average time per revolution (ms)
    pub one_circle_millis: SpinRange<u64>,
    /// Timing curve applied over the whole spin
    pub curve: EasingCurve,
}

impl SpinSettings {
    pub fn normal() -> Self {
        Self {
            circle_num: SpinRange { min: 9, max: 15 },
            one_circle_millis: SpinRange { min: 400, max: 600 },
            curve: EasingCurve::AccelerateDecelerate,
        }
    }

    pub fn turbo() -> Self {
        Self {
            circle_num: SpinRange { min: 3, max: 5 },
            one_circle_millis: SpinRange { min: 250, max: 350 },
            curve: EasingCurve::AccelerateDecelerate,
        }
    }

    pub fn studio() -> Self {
        Self {
            circle_num: SpinRange { min: 1, max: 1 },
            one_circle_millis: SpinRange { min: 100, max: 100 },
            curve: EasingCurve::AccelerateDecelerate,
        }
    }

    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
        }
    }

    pub fn validate(&self) -> WheelResult<()> {
        self.circle_num.validate()?;
        self.one_circle_millis.validate()
    }
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self::normal()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PLAN / OUTCOME
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything decided when a spin starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub target_index: usize,
    pub revolutions: u32,
    pub per_revolution_ms: u64,
    /// Rotation the animation starts from (negated previous baseline)
    pub start_rotation_degrees: f32,
    /// Absolute rotation the wheel comes to rest at
    pub total_rotation_degrees: f32,
    pub total_duration_ms: u64,
    /// Baseline stored once this spin completes
    pub landing_baseline: f32,
}

impl SpinPlan {
    /// Deterministic part of planning, given the random draws
    pub fn compute(
        target_index: usize,
        sector_count: usize,
        revolutions: u32,
        per_revolution_ms: u64,
        baseline_angle: f32,
    ) -> Self {
        let sector_angle = 360.0 / sector_count as f32;
        Self {
            target_index,
            revolutions,
            per_revolution_ms,
            start_rotation_degrees: -baseline_angle,
            total_rotation_degrees: 360.0 * revolutions as f32
                + sector_angle * -(target_index as f32),
            total_duration_ms: per_revolution_ms.saturating_mul(revolutions as u64),
            landing_baseline: sector_angle * target_index as f32,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.total_duration_ms)
    }
}

/// Immutable snapshot handed to completion listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub target_index: usize,
    pub prize: Prize,
    /// Rotation the wheel rests at
    pub rotation: f32,
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATE
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
struct Flight {
    plan: SpinPlan,
    animation: RotationAnimation,
    outcome: SpinOutcome,
}

/// Spin state owned by one controller
#[derive(Debug, Clone, Default)]
pub struct SpinState {
    /// Resting offset left by the last completed spin
    baseline_angle: f32,
    /// Rotation the host should currently apply to the wheel
    rotation: f32,
    flight: Option<Flight>,
}

impl SpinState {
    pub fn baseline_angle(&self) -> f32 {
        self.baseline_angle
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn in_flight(&self) -> bool {
        self.flight.is_some()
    }
}

/// Completion listener
pub type SpinListener = Box<dyn FnMut(&SpinOutcome) + Send>;

// ═══════════════════════════════════════════════════════════════════════════════
// CONTROLLER
// ═══════════════════════════════════════════════════════════════════════════════

/// Drives `Idle → Spinning → Idle` cycles.
///
/// The host calls [`SpinController::tick`] once per frame with the time since
/// the previous frame. A `spin` while another is in flight is rejected with
/// [`WheelError::SpinInProgress`].
pub struct SpinController {
    settings: SpinSettings,
    state: SpinState,
    rng: StdRng,
    listeners: Vec<SpinListener>,
    completed_spins: u64,
}

impl SpinController {
    pub fn new() -> Self {
        Self::with_settings(SpinSettings::default())
    }

    pub fn with_settings(settings: SpinSettings) -> Self {
        Self {
            settings,
            state: SpinState::default(),
            rng: StdRng::from_os_rng(),
            listeners: Vec::new(),
            completed_spins: 0,
        }
    }

    /// Controller with a reproducible random sequence
    pub fn with_seed(seed: u64) -> Self {
        let mut controller = Self::new();
        controller.seed(seed);
        controller
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Seed RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Set the revolution count range; `min > max` leaves the old range
    pub fn set_circle_num_range(&mut self, min: u32, max: u32) -> WheelResult<()> {
        let range = SpinRange::new(min, max).inspect_err(|e| log::warn!("Circle range: {e}"))?;
        self.settings.circle_num = range;
        Ok(())
    }

    /// Set the per-revolution duration range; `min > max` leaves the old range
    pub fn set_one_circle_millis_range(&mut self, min: u64, max: u64) -> WheelResult<()> {
        let range =
            SpinRange::new(min, max).inspect_err(|e| log::warn!("Revolution millis: {e}"))?;
        self.settings.one_circle_millis = range;
        Ok(())
    }

    pub fn set_curve(&mut self, curve: EasingCurve) {
        self.settings.curve = curve;
    }

    pub fn set_profile(&mut self, profile: SpinProfile) {
        self.settings = SpinSettings::from_profile(profile);
    }

    /// Replace all settings at once after validating them
    pub fn set_settings(&mut self, settings: SpinSettings) -> WheelResult<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    /// Register a listener called once per completed spin
    pub fn on_spin_complete<F>(&mut self, listener: F)
    where
        F: FnMut(&SpinOutcome) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATE
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    pub fn baseline_angle(&self) -> f32 {
        self.state.baseline_angle
    }

    pub fn is_spinning(&self) -> bool {
        self.state.in_flight()
    }

    /// Plan of the spin in flight
    pub fn current_plan(&self) -> Option<&SpinPlan> {
        self.state.flight.as_ref().map(|f| &f.plan)
    }

    /// Linear progress of the spin in flight
    pub fn progress(&self) -> Option<f64> {
        self.state.flight.as_ref().map(|f| f.animation.progress())
    }

    pub fn completed_spins(&self) -> u64 {
        self.completed_spins
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a spin that lands on the first prize with `target_id`.
    ///
    /// Unknown ids and re-entrant calls change nothing.
    pub fn spin(&mut self, model: &WheelModel, target_id: &str) -> WheelResult<SpinPlan> {
        if self.state.in_flight() {
            log::warn!("Spin to {target_id:?} rejected: spin in progress");
            return Err(WheelError::SpinInProgress);
        }

        let target_index = model
            .index_of_id(target_id)
            .inspect_err(|e| log::warn!("Spin rejected: {e}"))?;
        let prize = model.prize(target_index)?.clone();

        let per_revolution_ms = self
            .rng
            .random_range(self.settings.one_circle_millis.min..=self.settings.one_circle_millis.max);
        let revolutions = self
            .rng
            .random_range(self.settings.circle_num.min..=self.settings.circle_num.max);

        let plan = SpinPlan::compute(
            target_index,
            model.len(),
            revolutions,
            per_revolution_ms,
            self.state.baseline_angle,
        );

        log::debug!(
            "Spin to {:?} (sector {}): {} revolutions × {}ms, {:.1}° → {:.1}°",
            target_id,
            target_index,
            plan.revolutions,
            plan.per_revolution_ms,
            plan.start_rotation_degrees,
            plan.total_rotation_degrees
        );

        let animation = RotationAnimation::new(
            plan.start_rotation_degrees,
            plan.total_rotation_degrees,
            plan.duration(),
            self.settings.curve,
        );

        self.state.rotation = plan.start_rotation_degrees;
        self.state.flight = Some(Flight {
            plan: plan.clone(),
            animation,
            outcome: SpinOutcome {
                target_index,
                prize,
                rotation: plan.total_rotation_degrees,
            },
        });

        Ok(plan)
    }

    /// Advance the spin in flight by `dt`.
    ///
    /// Returns the outcome on the frame the spin completes. The final rotation
    /// is applied before listeners run.
    pub fn tick(&mut self, dt: Duration) -> Option<SpinOutcome> {
        let flight = self.state.flight.as_mut()?;
        self.state.rotation = flight.animation.advance(dt);
        if !flight.animation.is_finished() {
            return None;
        }

        let flight = self.state.flight.take()?;
        self.state.baseline_angle = flight.plan.landing_baseline;
        self.completed_spins += 1;

        log::info!(
            "Spin landed on {:?} (sector {}) at {:.1}°",
            flight.outcome.prize.id,
            flight.outcome.target_index,
            self.state.rotation
        );

        for listener in &mut self.listeners {
            listener(&flight.outcome);
        }
        Some(flight.outcome)
    }

    /// Run the spin in flight to completion with a fixed frame step
    pub fn run_to_completion(&mut self, frame: Duration) -> Option<SpinOutcome> {
        if frame.is_zero() {
            return None;
        }
        while self.is_spinning() {
            if let Some(outcome) = self.tick(frame) {
                return Some(outcome);
            }
        }
        None
    }
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new()
    }
}
