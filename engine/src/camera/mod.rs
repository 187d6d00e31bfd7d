//! Camera Module
//!
//! Third-person chase camera. This module is window-system agnostic - it
//! only deals with camera state and math.

pub mod rig;
pub mod viewport;

pub use rig::{CAMERA_SMOOTHING, CameraAnchors, CameraRig};
pub use viewport::ViewportCamera;
