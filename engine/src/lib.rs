//! Meadow Engine Library
//!
//! The per-frame core of a third-person avatar: input sampling, cooldown-gated
//! interaction, movement resolution, heading smoothing and a chase camera rig.
//! Rendering, asset loading and the physics solver are collaborators behind
//! small traits, so every module here runs headless.
//!
//! # Modules
//!
//! - [`math`] - Angle normalization and shortest-path angle interpolation
//! - [`input`] - Window-system agnostic keyboard and pointer-drag sampling
//! - [`player`] - Tuning, interaction gate, movement resolver and heading smoother
//! - [`camera`] - Viewport camera and the two-anchor chase rig
//! - [`physics`] - Physics body contract plus a small kinematic body
//! - [`world`] - Avatar transform hierarchy and proximity detection
//! - [`game`] - Progression, HUD, animation and the frame controller
//!
//! # Example
//!
//! ```rust,ignore
//! use meadow_engine::game::{ControllerConfig, FrameController, FrameWorld, PlayerContext};
//! use meadow_engine::input::{InputSampler, KeyCode};
//!
//! let mut sampler = InputSampler::new();
//! let mut controller = FrameController::new(&ControllerConfig::default());
//! let mut ctx = PlayerContext::default();
//!
//! sampler.handle_key(KeyCode::W, true);
//!
//! // Each frame:
//! let input = sampler.sample();
//! let report = controller.update(delta_time, &input, &mut ctx, &mut world);
//! ```

pub mod camera;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod world;

// Game-layer modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level
pub use camera::{CameraRig, ViewportCamera};
pub use input::{InputSampler, InputSnapshot, KeyCode};
pub use math::{lerp_angle, normalize_angle};
pub use player::{ControlTuning, HeadingSmoother, InteractionGate, MovementResolver};
