//! Game Module
//!
//! Everything that sits above the engine primitives for one play session.
//!
//! # Modules
//!
//! - `progression` - Experience and levels
//! - `animation` - Clip selection and cross-fading
//! - `interactables` - Objects with proximity triggers and prompt signs
//! - `hud` - Interaction menu and experience bar state
//! - `config` - JSON session configuration
//! - `state` - Shared per-player state
//! - `frame` - The per-frame controller tying it all together

pub mod animation;
pub mod config;
pub mod frame;
pub mod hud;
pub mod interactables;
pub mod progression;
pub mod state;

pub use animation::{
    ANIMATION_FADE, AnimationDriver, AnimationLabel, AnimationPlayer, CrossFadeMixer,
};
pub use config::{ConfigError, ControllerConfig};
pub use frame::{FrameController, FrameReport, FrameWorld};
pub use hud::{Hud, ProgressBar};
pub use interactables::{Interactable, PROMPT_OFFSET, PromptSign, any_in_range};
pub use progression::{DEBUG_XP_GRANT, XP_PER_LEVEL, XpChange, XpState};
pub use state::PlayerContext;
