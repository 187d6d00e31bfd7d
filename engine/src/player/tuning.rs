//! Control Tuning
//!
//! Designer-adjustable speeds for the avatar. Values are fixed for a session
//! once the controller is built.
//!
//! # Defaults
//!
//! - Walk speed: 0.7 units/s (0.1 - 4.0)
//! - Run speed: 1.3 units/s (0.2 - 12.0)
//! - Rotation speed: 3 degrees per frame at full steer (0.1 - 5 degrees)

use serde::{Deserialize, Serialize};

/// Default walk speed
pub const WALK_SPEED: f32 = 0.7;

/// Default run speed
pub const RUN_SPEED: f32 = 1.3;

/// Default turn step per frame at full horizontal input (3 degrees)
pub const ROTATION_SPEED: f32 = 3.0 * std::f32::consts::PI / 180.0;

/// Inclusive bounds for one tuning value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningRange {
    pub min: f32,
    pub max: f32,
}

impl TuningRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range. NaN falls back to `fallback`.
    pub fn clamp(&self, value: f32, fallback: f32) -> f32 {
        if value.is_nan() {
            fallback
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const WALK_SPEED_RANGE: TuningRange = TuningRange::new(0.1, 4.0);
pub const RUN_SPEED_RANGE: TuningRange = TuningRange::new(0.2, 12.0);
pub const ROTATION_SPEED_RANGE: TuningRange = TuningRange::new(
    0.1 * std::f32::consts::PI / 180.0,
    5.0 * std::f32::consts::PI / 180.0,
);

/// Speed tier selected by the movement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    #[default]
    Walk,
    Run,
}

/// Movement tuning for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Walking speed in units per second
    pub walk_speed: f32,
    /// Running speed in units per second
    pub run_speed: f32,
    /// Heading change per frame, in radians, at full horizontal input
    pub rotation_speed: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            rotation_speed: ROTATION_SPEED,
        }
    }
}

impl ControlTuning {
    /// Create tuning with explicit values (not clamped).
    pub fn new(walk_speed: f32, run_speed: f32, rotation_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            rotation_speed,
        }
    }

    /// Copy of this tuning with every value clamped into its designer range.
    pub fn clamped(&self) -> Self {
        Self {
            walk_speed: WALK_SPEED_RANGE.clamp(self.walk_speed, WALK_SPEED),
            run_speed: RUN_SPEED_RANGE.clamp(self.run_speed, RUN_SPEED),
            rotation_speed: ROTATION_SPEED_RANGE.clamp(self.rotation_speed, ROTATION_SPEED),
        }
    }

    /// Speed for a tier.
    pub fn speed_for(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Walk => self.walk_speed,
            SpeedTier::Run => self.run_speed,
        }
    }
}
