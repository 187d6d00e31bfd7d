//! Movement Resolver
//!
//! Fuses held keys and an optional pointer drag into a planar movement
//! vector, then turns that into a world-space velocity relative to the
//! steering heading.
//!
//! # Input Precedence
//!
//! 1. Forward/backward keys set `z` (backward wins if both are held).
//! 2. An active drag overrides `x` (outside a dead zone) and always
//!    overrides `z` with a forward bias. A strong drag forces running.
//! 3. Left/right keys are applied last and override the drag's `x`.
//!
//! Horizontal input steers: each frame with `x != 0` adds
//! `rotation_speed * x` to the container's yaw target. Any input moves the
//! avatar at full tier speed in direction `container_target + atan2(x, z)`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let resolver = MovementResolver::new(tuning, true);
//! let movement = resolver.resolve(&input, &mut heading);
//! body.set_linear_velocity(movement.velocity, true);
//! ```

use glam::{Vec2, Vec3};

use crate::input::InputSnapshot;

use super::heading::HeadingState;
use super::tuning::{ControlTuning, SpeedTier};

/// Drag x inside this magnitude is ignored
pub const DRAG_DEAD_ZONE: f32 = 0.1;

/// Added to drag y so a press near screen center still walks forward
pub const DRAG_FORWARD_BIAS: f32 = 0.4;

/// Drag components beyond this magnitude force the run tier
pub const DRAG_RUN_THRESHOLD: f32 = 0.5;

/// Locomotion state picked from the resolved movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locomotion {
    #[default]
    Idle,
    Walk,
    Run,
}

/// Everything one call to [`MovementResolver::resolve`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOutput {
    /// Planar input: x = steer (positive left), y = forward
    pub planar: Vec2,
    /// Speed tier in effect
    pub tier: SpeedTier,
    /// Horizontal world-space velocity (y is always zero)
    pub velocity: Vec3,
    /// Character facing relative to the container, `None` when idle
    pub facing: Option<f32>,
    /// Amount added to the container's yaw target this frame
    pub rotation_delta: f32,
    pub locomotion: Locomotion,
}

impl MovementOutput {
    pub fn is_moving(&self) -> bool {
        self.facing.is_some()
    }
}

/// Turns an [`InputSnapshot`] into movement for one frame.
#[derive(Debug, Clone, Copy)]
pub struct MovementResolver {
    tuning: ControlTuning,
    /// Whether pointer drags steer the avatar
    drag_controls: bool,
}

impl Default for MovementResolver {
    fn default() -> Self {
        Self::new(ControlTuning::default(), true)
    }
}

impl MovementResolver {
    pub fn new(tuning: ControlTuning, drag_controls: bool) -> Self {
        Self {
            tuning,
            drag_controls,
        }
    }

    pub fn tuning(&self) -> &ControlTuning {
        &self.tuning
    }

    pub fn drag_controls(&self) -> bool {
        self.drag_controls
    }

    /// Combine keys and drag into planar input and a speed tier.
    pub fn planar_input(&self, input: &InputSnapshot) -> (Vec2, SpeedTier) {
        let actions = &input.actions;
        let mut x = 0.0;
        let mut z = 0.0;

        if actions.forward {
            z = 1.0;
        }
        if actions.backward {
            z = -1.0;
        }

        let mut tier = if actions.run {
            SpeedTier::Run
        } else {
            SpeedTier::Walk
        };

        if input.dragging && self.drag_controls {
            if input.drag.x.abs() > DRAG_DEAD_ZONE {
                x = -input.drag.x;
            }
            z = input.drag.y + DRAG_FORWARD_BIAS;
            if f32::abs(x) > DRAG_RUN_THRESHOLD || f32::abs(z) > DRAG_RUN_THRESHOLD {
                tier = SpeedTier::Run;
            }
        }

        // Keys after drag: a held key wins over the drag on the same axis
        if actions.left {
            x = 1.0;
        }
        if actions.right {
            x = -1.0;
        }

        (Vec2::new(x, z), tier)
    }

    /// Resolve one frame of movement.
    ///
    /// Accumulates steering into `heading.container_target` and, when
    /// moving, points `heading.character_target` at the movement direction.
    /// An idle frame leaves the character target where it was.
    pub fn resolve(&self, input: &InputSnapshot, heading: &mut HeadingState) -> MovementOutput {
        let (planar, tier) = self.planar_input(input);

        let mut rotation_delta = 0.0;
        if planar.x != 0.0 {
            rotation_delta = self.tuning.rotation_speed * planar.x;
            heading.container_target += rotation_delta;
        }

        if planar.x == 0.0 && planar.y == 0.0 {
            return MovementOutput {
                planar,
                tier,
                velocity: Vec3::ZERO,
                facing: None,
                rotation_delta,
                locomotion: Locomotion::Idle,
            };
        }

        let facing = planar.x.atan2(planar.y);
        heading.character_target = facing;

        let speed = self.tuning.speed_for(tier);
        let direction = heading.container_target + facing;
        let velocity = Vec3::new(direction.sin() * speed, 0.0, direction.cos() * speed);

        let locomotion = match tier {
            SpeedTier::Walk => Locomotion::Walk,
            SpeedTier::Run => Locomotion::Run,
        };

        MovementOutput {
            planar,
            tier,
            velocity,
            facing: Some(facing),
            rotation_delta,
            locomotion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ActionFlags;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn keys(f: impl FnOnce(&mut ActionFlags)) -> InputSnapshot {
        let mut actions = ActionFlags::default();
        f(&mut actions);
        InputSnapshot::from_actions(actions)
    }

    fn resolver() -> MovementResolver {
        MovementResolver::new(ControlTuning::new(0.7, 1.3, 0.05), true)
    }

    #[test]
    fn test_no_input_is_idle() {
        let mut heading = HeadingState::new();
        let out = resolver().resolve(&InputSnapshot::default(), &mut heading);

        assert_eq!(out.velocity, Vec3::ZERO);
        assert_eq!(out.locomotion, Locomotion::Idle);
        assert!(out.facing.is_none());
        assert_eq!(heading, HeadingState::new());
    }

    #[test]
    fn test_forward_walks_along_heading() {
        let mut heading = HeadingState::new();
        let out = resolver().resolve(&keys(|a| a.forward = true), &mut heading);

        assert!((out.velocity - Vec3::new(0.0, 0.0, 0.7)).length() < 1e-6);
        assert_eq!(out.locomotion, Locomotion::Walk);
        assert_eq!(out.rotation_delta, 0.0);
    }

    #[test]
    fn test_backward_overrides_forward() {
        let mut heading = HeadingState::new();
        let input = keys(|a| {
            a.forward = true;
            a.backward = true;
        });
        let out = resolver().resolve(&input, &mut heading);

        assert_eq!(out.planar, Vec2::new(0.0, -1.0));
        assert!((heading.character_target - PI).abs() < 1e-6);
    }

    #[test]
    fn test_right_overrides_left() {
        let input = keys(|a| {
            a.left = true;
            a.right = true;
        });
        let (planar, _) = resolver().planar_input(&input);
        assert_eq!(planar.x, -1.0);
    }

    #[test]
    fn test_forward_left_steers_and_moves() {
        let mut heading = HeadingState::new();
        let input = keys(|a| {
            a.forward = true;
            a.left = true;
        });
        let out = resolver().resolve(&input, &mut heading);

        assert!((heading.container_target - 0.05).abs() < 1e-6);
        assert!((out.rotation_delta - 0.05).abs() < 1e-6);
        assert!((out.velocity.length() - 0.7).abs() < 1e-5);
        assert!((out.facing.unwrap() - FRAC_PI_4).abs() < 1e-6);

        let direction = out.velocity.x.atan2(out.velocity.z);
        assert!((direction - (0.05 + FRAC_PI_4)).abs() < 1e-5);
    }

    #[test]
    fn test_steering_accumulates_across_frames() {
        let mut heading = HeadingState::new();
        let input = keys(|a| a.right = true);
        for _ in 0..10 {
            resolver().resolve(&input, &mut heading);
        }
        assert!((heading.container_target + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_run_key_selects_run_speed() {
        let mut heading = HeadingState::new();
        let input = keys(|a| {
            a.forward = true;
            a.run = true;
        });
        let out = resolver().resolve(&input, &mut heading);

        assert_eq!(out.tier, SpeedTier::Run);
        assert_eq!(out.locomotion, Locomotion::Run);
        assert!((out.velocity.length() - 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_drag_dead_zone_and_forward_bias() {
        let input = InputSnapshot::dragging_at(Vec2::new(0.05, 0.2));
        let (planar, tier) = resolver().planar_input(&input);

        assert_eq!(planar.x, 0.0);
        assert!((planar.y - 0.6).abs() < 1e-6);
        // |z| = 0.6 is past the run threshold
        assert_eq!(tier, SpeedTier::Run);
    }

    #[test]
    fn test_gentle_drag_walks() {
        let input = InputSnapshot::dragging_at(Vec2::new(-0.3, -0.1));
        let (planar, tier) = resolver().planar_input(&input);

        assert!((planar.x - 0.3).abs() < 1e-6);
        assert!((planar.y - 0.3).abs() < 1e-6);
        assert_eq!(tier, SpeedTier::Walk);
    }

    #[test]
    fn test_keys_override_drag_x() {
        let mut input = InputSnapshot::dragging_at(Vec2::new(0.8, 0.0));
        input.actions.left = true;
        let (planar, tier) = resolver().planar_input(&input);

        assert_eq!(planar.x, 1.0);
        // Forced run was decided from the drag before the key applied
        assert_eq!(tier, SpeedTier::Run);
    }

    #[test]
    fn test_drag_ignored_when_disabled() {
        let resolver = MovementResolver::new(ControlTuning::default(), false);
        let input = InputSnapshot::dragging_at(Vec2::new(0.9, 0.9));
        let (planar, tier) = resolver.planar_input(&input);

        assert_eq!(planar, Vec2::ZERO);
        assert_eq!(tier, SpeedTier::Walk);
    }

    #[test]
    fn test_idle_keeps_character_target() {
        let mut heading = HeadingState::new();
        resolver().resolve(&keys(|a| a.backward = true), &mut heading);
        let target = heading.character_target;

        resolver().resolve(&InputSnapshot::default(), &mut heading);
        assert_eq!(heading.character_target, target);
    }
}
