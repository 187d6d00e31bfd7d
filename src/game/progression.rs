//! Experience and Levels
//!
//! The only mutation is [`XpState::add_xp`]. Each level needs
//! `level * 100` experience; reaching it resets experience to zero and
//! raises the level by exactly one, however large the grant was.

use log::debug;

/// Experience needed per level, multiplied by the current level
pub const XP_PER_LEVEL: u32 = 100;

/// Experience granted per frame while the debug key is held
pub const DEBUG_XP_GRANT: u32 = 1;

/// Outcome of one experience grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XpChange {
    pub leveled_up: bool,
}

/// Experience and level. Invariant: `xp < level * XP_PER_LEVEL` and
/// `level >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpState {
    xp: u32,
    level: u32,
}

impl Default for XpState {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

impl XpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a saved state. Out-of-range input is pulled back inside the
    /// invariant (level at least 1, xp below the next threshold).
    pub fn from_parts(xp: u32, level: u32) -> Self {
        let level = level.max(1);
        let xp = xp.min(Self::threshold_for(level).saturating_sub(1));
        Self { xp, level }
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience needed to leave the current level.
    pub fn xp_for_next_level(&self) -> u32 {
        Self::threshold_for(self.level)
    }

    fn threshold_for(level: u32) -> u32 {
        level.saturating_mul(XP_PER_LEVEL)
    }

    /// Add experience, leveling up at most once.
    pub fn add_xp(&mut self, amount: u32) -> XpChange {
        let total = self.xp.saturating_add(amount);

        if total >= self.xp_for_next_level() {
            self.xp = 0;
            self.level = self.level.saturating_add(1);
            debug!("level up: now level {}", self.level);
            return XpChange { leveled_up: true };
        }

        self.xp = total;
        XpChange { leveled_up: false }
    }

    /// Progress through the current level as a whole percentage,
    /// `floor(min(xp / threshold, 1) * 100)`.
    pub fn progress_percent(&self) -> u32 {
        // Integer math: 99 of 100 must read 99, not 98
        let threshold = u64::from(self.xp_for_next_level());
        let xp = u64::from(self.xp).min(threshold);
        (xp * 100 / threshold) as u32
    }
}
