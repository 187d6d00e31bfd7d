//! Math Module
//!
//! Scalar and angular helpers shared by the player and camera code.
//! Vector math comes straight from glam.

pub mod angle;

pub use angle::{lerp, lerp_angle, normalize_angle};
