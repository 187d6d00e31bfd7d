//! Heads-Up Display State
//!
//! What the overlay shows, derived from player state each frame: the
//! interaction menu (visible exactly while interacting) and the experience
//! progress bar. Drawing is left to the host.

use log::debug;

use crate::game::progression::XpState;
use crate::player::InteractionState;

/// Experience bar contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    /// Fill in whole percent, 0 - 100
    pub percent: u32,
    pub level: u32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            percent: 0,
            level: 1,
        }
    }
}

impl ProgressBar {
    pub fn from_xp(xp: &XpState) -> Self {
        Self {
            percent: xp.progress_percent(),
            level: xp.level(),
        }
    }

    /// Fill fraction for a bar widget, 0.0 - 1.0.
    pub fn fill(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    pub fn xp_label(&self) -> String {
        format!("Xp: {}%", self.percent)
    }

    pub fn level_label(&self) -> String {
        format!("Lvl: {}", self.level)
    }
}

/// Overlay state observed from the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub interaction_menu_visible: bool,
    pub progress: ProgressBar,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh from player state. Returns `true` if anything changed.
    pub fn observe(&mut self, interaction: &InteractionState, xp: &XpState) -> bool {
        let mut changed = false;

        if self.interaction_menu_visible != interaction.interacting {
            self.interaction_menu_visible = interaction.interacting;
            debug!("interaction menu visible: {}", self.interaction_menu_visible);
            changed = true;
        }

        let progress = ProgressBar::from_xp(xp);
        if progress != self.progress {
            debug!(
                "XP: {}, Level: {}, Progress: {}%",
                xp.xp(),
                progress.level,
                progress.percent
            );
            self.progress = progress;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_mirrors_interacting() {
        let mut hud = Hud::new();
        let mut interaction = InteractionState::default();
        let xp = XpState::new();

        assert!(!hud.observe(&interaction, &xp));

        interaction.interacting = true;
        assert!(hud.observe(&interaction, &xp));
        assert!(hud.interaction_menu_visible);

        interaction.interacting = false;
        hud.observe(&interaction, &xp);
        assert!(!hud.interaction_menu_visible);
    }

    #[test]
    fn test_progress_labels() {
        let mut hud = Hud::new();
        hud.observe(&InteractionState::default(), &XpState::from_parts(45, 2));

        assert_eq!(hud.progress.xp_label(), "Xp: 22%");
        assert_eq!(hud.progress.level_label(), "Lvl: 2");
        assert!((hud.progress.fill() - 0.22).abs() < 1e-6);
    }
}
