//! Interaction Gate
//!
//! Turns the leveled `interact` flag into a toggle of the shared
//! `interacting` flag. A toggle needs a fresh press (rising edge), an
//! expired cooldown, and, when entering, a nearby interactable. Anything
//! else is a silent no-op for the frame.
//!
//! The cooldown is a deadline rather than a timer callback: it is checked
//! against the frame's timestamp, so clearing is always observed at a frame
//! boundary and never races the update.

use std::time::{Duration, Instant};

use log::debug;

use crate::input::InputSnapshot;

/// Minimum time between two accepted toggles
pub const INTERACTION_COOLDOWN: Duration = Duration::from_millis(500);

/// Interaction flags shared between the gate and the world.
///
/// `interacting` is written only by [`InteractionGate`]; `able_to_interact`
/// only by proximity detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub interacting: bool,
    pub able_to_interact: bool,
}

/// One-shot cooldown measured against frame timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CooldownTimer {
    deadline: Option<Instant>,
}

impl CooldownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the cooldown until `now + duration`.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Whether the cooldown is still running at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Clear an expired cooldown. Returns `true` if it cleared on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Deadline of the running cooldown, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the cooldown clears.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

/// Why a toggle attempt did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Interact is not held this frame.
    NotPressed,
    /// Interact is still held from an earlier frame.
    Held,
    /// A previous toggle is still cooling down.
    CoolingDown,
    /// Entering an interaction with nothing in range.
    OutOfRange,
}

/// Result of [`InteractionGate::try_toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// `interacting` went false -> true
    Entered,
    /// `interacting` went true -> false
    Exited,
    Ignored(IgnoreReason),
}

impl ToggleOutcome {
    pub fn is_toggle(&self) -> bool {
        !matches!(self, ToggleOutcome::Ignored(_))
    }
}

/// Cooldown-gated, edge-triggered interaction toggle.
#[derive(Debug, Clone)]
pub struct InteractionGate {
    timer: CooldownTimer,
    cooldown: Duration,
    /// Interact flag as seen on the previous call
    interact_was_held: bool,
}

impl Default for InteractionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionGate {
    /// Create a gate with the standard 500 ms cooldown.
    pub fn new() -> Self {
        Self::with_cooldown(INTERACTION_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            timer: CooldownTimer::new(),
            cooldown,
            interact_was_held: false,
        }
    }

    pub fn timer(&self) -> &CooldownTimer {
        &self.timer
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Clear the cooldown if it has expired. Call at the start of a frame.
    /// Never touches `interacting`.
    pub fn poll(&mut self, now: Instant) {
        if self.timer.poll(now) {
            debug!("interaction cooldown cleared");
        }
    }

    /// Attempt to flip `state.interacting`.
    ///
    /// Checks, in order: a fresh interact press, no running cooldown, and
    /// (only when entering) `state.able_to_interact`. Leaving is always
    /// allowed once the cooldown has cleared. A successful toggle arms the
    /// cooldown.
    pub fn try_toggle(
        &mut self,
        input: &InputSnapshot,
        state: &mut InteractionState,
        now: Instant,
    ) -> ToggleOutcome {
        let held = input.actions.interact;
        let was_held = std::mem::replace(&mut self.interact_was_held, held);

        if !held {
            return ToggleOutcome::Ignored(IgnoreReason::NotPressed);
        }
        if was_held {
            return ToggleOutcome::Ignored(IgnoreReason::Held);
        }
        if self.timer.is_active(now) {
            return ToggleOutcome::Ignored(IgnoreReason::CoolingDown);
        }
        if !state.interacting && !state.able_to_interact {
            return ToggleOutcome::Ignored(IgnoreReason::OutOfRange);
        }

        state.interacting = !state.interacting;
        self.timer.start(now, self.cooldown);
        debug!("interacting: {}", state.interacting);

        if state.interacting {
            ToggleOutcome::Entered
        } else {
            ToggleOutcome::Exited
        }
    }
}
