//! World Module
//!
//! World-space pieces around the avatar: its transform hierarchy and the
//! proximity checks that decide whether an interaction is possible.

pub mod proximity;
pub mod transform;

pub use proximity::{PROXIMITY_THRESHOLD, ProximityDetector};
pub use transform::{
    AvatarRig, CAMERA_LOOK_OFFSET, CAMERA_POSITION_OFFSET, CHARACTER_OFFSET, CHARACTER_SCALE,
    Transform,
};
