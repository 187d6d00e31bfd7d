//! Avatar Transforms
//!
//! The avatar is a small transform hierarchy:
//!
//! ```text
//! body (physics translation, rotation locked)
//! └── container (yaw = smoothed container yaw)
//!     ├── camera look-at target   local (0, 0,  2)
//!     ├── camera position target  local (0, 2, -3)
//!     └── character mesh          yaw = smoothed character yaw, scale 0.65
//! ```
//!
//! Camera targets ride on the container, so the chase camera swings with
//! the body's steering but not with the character's facing.

use glam::{Quat, Vec3};

use crate::player::HeadingState;

/// Look-at target, 2 units ahead of the body
pub const CAMERA_LOOK_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 2.0);

/// Camera position target, 2 units up and 3 behind
pub const CAMERA_POSITION_OFFSET: Vec3 = Vec3::new(0.0, 2.0, -3.0);

/// Uniform scale of the character mesh
pub const CHARACTER_SCALE: f32 = 0.65;

/// Character mesh offset inside the container (feet on the capsule bottom)
pub const CHARACTER_OFFSET: Vec3 = Vec3::new(0.0, -0.25, 0.0);

/// Rigid transform with uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Transform rotated about +Y by `yaw` radians.
    pub fn from_yaw(translation: Vec3, yaw: f32) -> Self {
        Self {
            translation,
            rotation: Quat::from_rotation_y(yaw),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Map a point from this transform's local space to its parent space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * (point * self.scale)
    }

    /// Compose: `self` is the parent, `child` is expressed in its space.
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.transform_point(child.translation),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }
}

/// The avatar's transform hierarchy, rebuilt from physics and headings each
/// frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarRig {
    /// Body origin in world space
    pub body_translation: Vec3,
    pub container_yaw: f32,
    pub character_yaw: f32,
    /// Container-local look-at target; `None` until mounted
    pub camera_look_offset: Option<Vec3>,
    /// Container-local camera position target; `None` until mounted
    pub camera_position_offset: Option<Vec3>,
}

impl Default for AvatarRig {
    fn default() -> Self {
        Self {
            body_translation: Vec3::ZERO,
            container_yaw: 0.0,
            character_yaw: 0.0,
            camera_look_offset: Some(CAMERA_LOOK_OFFSET),
            camera_position_offset: Some(CAMERA_POSITION_OFFSET),
        }
    }
}

impl AvatarRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rig with no camera targets attached yet.
    pub fn unmounted() -> Self {
        Self {
            camera_look_offset: None,
            camera_position_offset: None,
            ..Self::default()
        }
    }

    /// Pull the body position and smoothed headings into the rig.
    pub fn sync(&mut self, body_translation: Vec3, heading: &HeadingState) {
        self.body_translation = body_translation;
        self.container_yaw = heading.container_yaw;
        self.character_yaw = heading.character_yaw;
    }

    /// World transform of the container.
    pub fn container_transform(&self) -> Transform {
        Transform::from_yaw(self.body_translation, self.container_yaw)
    }

    /// World transform of the character mesh.
    pub fn character_transform(&self) -> Transform {
        let local = Transform::from_yaw(CHARACTER_OFFSET, self.character_yaw)
            .with_scale(CHARACTER_SCALE);
        self.container_transform().mul_transform(&local)
    }

    /// Map a container-local point to world space.
    pub fn world_point(&self, local: Vec3) -> Vec3 {
        self.container_transform().transform_point(local)
    }

    /// World position the player is tracked at (the character group origin).
    pub fn player_position(&self) -> Vec3 {
        self.body_translation
    }

    /// Live world position of the camera position target.
    pub fn camera_position_target(&self) -> Option<Vec3> {
        self.camera_position_offset.map(|local| self.world_point(local))
    }

    /// Live world position of the camera look-at target.
    pub fn camera_look_target(&self) -> Option<Vec3> {
        self.camera_look_offset.map(|local| self.world_point(local))
    }
}
