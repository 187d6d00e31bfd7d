//! Physics module
//!
//! The avatar's rigid body is an external collaborator. This module defines
//! the contract the controller relies on and a small kinematic body that
//! satisfies it for the demo host and tests.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in units per second.

pub mod body;

pub use body::{GRAVITY, GROUND_DAMPING, KinematicBody, PhysicsBody};
