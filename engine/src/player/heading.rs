//! Heading Smoother
//!
//! Two yaw angles follow their targets with a fixed per-frame blend:
//!
//! - **Container yaw** frames the camera and orients the body. Its target is
//!   accumulated by steering input, so it moves continuously and a plain lerp
//!   is enough. Smoothing pauses while interacting.
//! - **Character yaw** is the visible mesh facing. Its target jumps whenever
//!   the movement direction flips, so it blends along the shorter arc.
//!
//! Both stored yaws stay in (-PI, PI]. When the container yaw leaves that
//! range it is rewrapped together with its target, which keeps the lerp
//! distance (and thus the motion) unchanged.

use crate::math::{lerp, lerp_angle, normalize_angle};

/// Per-frame blend factor for both headings
pub const HEADING_SMOOTHING: f32 = 0.1;

/// Smoothed yaw angles and their targets, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadingState {
    /// Smoothed body/container yaw
    pub container_yaw: f32,
    /// Accumulated steering target for the container
    pub container_target: f32,
    /// Smoothed character mesh yaw, relative to the container
    pub character_yaw: f32,
    /// Facing the character turns toward, relative to the container
    pub character_target: f32,
}

impl HeadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start facing a given world yaw with no pending turn.
    pub fn facing(yaw: f32) -> Self {
        let yaw = normalize_angle(yaw);
        Self {
            container_yaw: yaw,
            container_target: yaw,
            ..Self::default()
        }
    }

    /// World-space yaw of the visible character.
    pub fn world_character_yaw(&self) -> f32 {
        normalize_angle(self.container_yaw + self.character_yaw)
    }
}

/// Advances a [`HeadingState`] toward its targets once per frame.
#[derive(Debug, Clone, Copy)]
pub struct HeadingSmoother {
    factor: f32,
}

impl Default for HeadingSmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingSmoother {
    pub fn new() -> Self {
        Self::with_factor(HEADING_SMOOTHING)
    }

    pub fn with_factor(factor: f32) -> Self {
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Apply one frame of smoothing.
    pub fn update(&self, heading: &mut HeadingState, interacting: bool) {
        heading.character_yaw =
            lerp_angle(heading.character_yaw, heading.character_target, self.factor);

        if interacting {
            return;
        }

        heading.container_yaw = lerp(heading.container_yaw, heading.container_target, self.factor);

        let wrapped = normalize_angle(heading.container_yaw);
        if wrapped != heading.container_yaw {
            let shift = wrapped - heading.container_yaw;
            heading.container_yaw = wrapped;
            heading.container_target += shift;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_container_lerps_toward_target() {
        let smoother = HeadingSmoother::new();
        let mut heading = HeadingState::new();
        heading.container_target = 1.0;

        smoother.update(&mut heading, false);
        assert!((heading.container_yaw - 0.1).abs() < 1e-6);

        smoother.update(&mut heading, false);
        assert!((heading.container_yaw - 0.19).abs() < 1e-6);
    }

    #[test]
    fn test_container_frozen_while_interacting() {
        let smoother = HeadingSmoother::new();
        let mut heading = HeadingState::new();
        heading.container_target = 1.0;
        heading.character_target = 1.0;

        smoother.update(&mut heading, true);
        assert_eq!(heading.container_yaw, 0.0);
        // Character facing still follows
        assert!(heading.character_yaw > 0.0);
    }

    #[test]
    fn test_character_takes_short_arc() {
        let smoother = HeadingSmoother::new();
        let mut heading = HeadingState::new();
        heading.character_yaw = 3.0;
        heading.character_target = -3.0;

        smoother.update(&mut heading, false);
        // Moving toward +PI, across the seam, not back through zero
        assert!(heading.character_yaw > 3.0 || heading.character_yaw < -3.0);
        assert!(heading.character_yaw > -PI && heading.character_yaw <= PI);
    }

    #[test]
    fn test_container_rewrap_keeps_motion() {
        let smoother = HeadingSmoother::new();
        let mut heading = HeadingState::new();
        heading.container_yaw = 3.1;
        heading.container_target = 4.1;

        smoother.update(&mut heading, false);

        // Unwrapped result would be 3.2; stored value is that minus a full turn
        assert!((heading.container_yaw - (3.2 - 2.0 * PI)).abs() < 1e-5);
        assert!((heading.container_target - heading.container_yaw - 0.9).abs() < 1e-5);
        assert!(heading.container_yaw > -PI && heading.container_yaw <= PI);
    }

    #[test]
    fn test_converges_over_many_frames() {
        let smoother = HeadingSmoother::new();
        let mut heading = HeadingState::new();
        heading.container_target = 0.5;
        heading.character_target = -1.5;

        for _ in 0..200 {
            smoother.update(&mut heading, false);
        }
        assert!((heading.container_yaw - 0.5).abs() < 1e-4);
        assert!((heading.character_yaw + 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_world_character_yaw() {
        let mut heading = HeadingState::facing(1.0);
        heading.character_yaw = PI;
        assert!((heading.world_character_yaw() - (1.0 - PI)).abs() < 1e-5);
    }
}
