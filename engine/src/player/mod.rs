//! Player Module
//!
//! Per-frame avatar control.
//!
//! # Components
//!
//! - [`ControlTuning`] - Walk/run speeds and steering rate for a session
//! - [`InteractionGate`] - Edge-triggered, cooldown-gated interaction toggle
//! - [`MovementResolver`] - Keys + drag -> planar input, velocity and locomotion
//! - [`HeadingSmoother`] - Container and character yaw smoothing

pub mod heading;
pub mod interaction;
pub mod movement_resolver;
pub mod tuning;

pub use heading::{HEADING_SMOOTHING, HeadingSmoother, HeadingState};
pub use interaction::{
    CooldownTimer, INTERACTION_COOLDOWN, IgnoreReason, InteractionGate, InteractionState,
    ToggleOutcome,
};
pub use movement_resolver::{
    DRAG_DEAD_ZONE, DRAG_FORWARD_BIAS, DRAG_RUN_THRESHOLD, Locomotion, MovementOutput,
    MovementResolver,
};
pub use tuning::{ControlTuning, ROTATION_SPEED, RUN_SPEED, SpeedTier, WALK_SPEED};
