//! Player State
//!
//! The shared state every per-frame system reads or mutates. Owned by the
//! host and passed to the frame controller by `&mut` each frame.

use crate::game::progression::XpState;
use crate::player::{HeadingState, InteractionState};

/// State shared between the controller's systems.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerContext {
    pub interaction: InteractionState,
    pub heading: HeadingState,
    pub xp: XpState,
}

impl PlayerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.interacting
    }
}
