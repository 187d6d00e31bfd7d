//! Animation
//!
//! The controller never plays clips itself. It asks an [`AnimationPlayer`]
//! through an [`AnimationDriver`], which owns the "currently playing" clip:
//! requesting a new label always stops the previous clip (0.5 s fade-out)
//! before the new one fades in, and re-requesting the same label does
//! nothing. Labels without a clip are skipped.

use std::collections::{HashMap, HashSet};

use crate::player::Locomotion;

/// Cross-fade duration in seconds for both fade-in and fade-out
pub const ANIMATION_FADE: f32 = 0.5;

/// Clips the avatar can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationLabel {
    Idle,
    Walk,
    Run,
    /// Greeting played when an interaction starts
    Wave,
}

impl AnimationLabel {
    pub const ALL: [AnimationLabel; 4] = [
        AnimationLabel::Idle,
        AnimationLabel::Walk,
        AnimationLabel::Run,
        AnimationLabel::Wave,
    ];

    /// Clip name as stored in the model file.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationLabel::Idle => "Idle",
            AnimationLabel::Walk => "Walk",
            AnimationLabel::Run => "Run",
            AnimationLabel::Wave => "Wave",
        }
    }
}

impl From<Locomotion> for AnimationLabel {
    fn from(locomotion: Locomotion) -> Self {
        match locomotion {
            Locomotion::Idle => AnimationLabel::Idle,
            Locomotion::Walk => AnimationLabel::Walk,
            Locomotion::Run => AnimationLabel::Run,
        }
    }
}

/// Clip playback backend.
pub trait AnimationPlayer {
    /// Whether a clip exists for `label`.
    fn has_clip(&self, label: AnimationLabel) -> bool;

    /// Restart `label` from the beginning, fading in over `fade_in` seconds.
    fn play(&mut self, label: AnimationLabel, fade_in: f32);

    /// Fade `label` out over `fade_out` seconds.
    fn stop(&mut self, label: AnimationLabel, fade_out: f32);

    /// Advance blending by `delta_time` seconds.
    fn advance(&mut self, _delta_time: f32) {}
}

/// Tracks the requested label and the clip actually playing.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    requested: Option<AnimationLabel>,
    playing: Option<AnimationLabel>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label most recently requested.
    pub fn current(&self) -> Option<AnimationLabel> {
        self.requested
    }

    /// Clip started for the current label, if it had one.
    pub fn playing(&self) -> Option<AnimationLabel> {
        self.playing
    }

    /// Switch to `label`. Returns `true` if the request changed anything.
    pub fn request<P: AnimationPlayer + ?Sized>(
        &mut self,
        label: AnimationLabel,
        player: &mut P,
    ) -> bool {
        if self.requested == Some(label) {
            return false;
        }

        if let Some(previous) = self.playing.take() {
            player.stop(previous, ANIMATION_FADE);
        }

        self.requested = Some(label);
        if player.has_clip(label) {
            player.play(label, ANIMATION_FADE);
            self.playing = Some(label);
        }
        true
    }

    /// Stop whatever is playing and forget the request.
    pub fn release<P: AnimationPlayer + ?Sized>(&mut self, player: &mut P) {
        if let Some(previous) = self.playing.take() {
            player.stop(previous, ANIMATION_FADE);
        }
        self.requested = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ClipBlend {
    weight: f32,
    target: f32,
    /// Weight change per second
    rate: f32,
}

/// In-memory player that tracks per-clip blend weights.
#[derive(Debug, Clone, Default)]
pub struct CrossFadeMixer {
    clips: HashSet<AnimationLabel>,
    blends: HashMap<AnimationLabel, ClipBlend>,
}

impl CrossFadeMixer {
    /// Mixer with a clip for every label.
    pub fn new() -> Self {
        Self::with_clips(AnimationLabel::ALL)
    }

    pub fn with_clips(clips: impl IntoIterator<Item = AnimationLabel>) -> Self {
        Self {
            clips: clips.into_iter().collect(),
            blends: HashMap::new(),
        }
    }

    /// Current blend weight of a clip (0 when not playing).
    pub fn weight(&self, label: AnimationLabel) -> f32 {
        self.blends.get(&label).map_or(0.0, |blend| blend.weight)
    }

    /// Whether a clip is fading or playing.
    pub fn is_active(&self, label: AnimationLabel) -> bool {
        self.blends.contains_key(&label)
    }

    /// Clips currently contributing to the pose.
    pub fn active_clips(&self) -> impl Iterator<Item = AnimationLabel> + '_ {
        self.blends.keys().copied()
    }

    fn rate_for(fade: f32) -> f32 {
        if fade > 0.0 { 1.0 / fade } else { f32::INFINITY }
    }
}

impl AnimationPlayer for CrossFadeMixer {
    fn has_clip(&self, label: AnimationLabel) -> bool {
        self.clips.contains(&label)
    }

    fn play(&mut self, label: AnimationLabel, fade_in: f32) {
        if !self.has_clip(label) {
            return;
        }
        self.blends.insert(
            label,
            ClipBlend {
                weight: 0.0,
                target: 1.0,
                rate: Self::rate_for(fade_in),
            },
        );
    }

    fn stop(&mut self, label: AnimationLabel, fade_out: f32) {
        if let Some(blend) = self.blends.get_mut(&label) {
            blend.target = 0.0;
            blend.rate = Self::rate_for(fade_out);
        }
    }

    fn advance(&mut self, delta_time: f32) {
        for blend in self.blends.values_mut() {
            let step = blend.rate * delta_time.max(0.0);
            if blend.weight < blend.target {
                blend.weight = (blend.weight + step).min(blend.target);
            } else {
                blend.weight = (blend.weight - step).max(blend.target);
            }
        }
        self.blends
            .retain(|_, blend| !(blend.target == 0.0 && blend.weight <= 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call, for checking the driver's call sequence.
    #[derive(Default)]
    struct Recorder {
        missing: Vec<AnimationLabel>,
        calls: Vec<(&'static str, AnimationLabel)>,
    }

    impl AnimationPlayer for Recorder {
        fn has_clip(&self, label: AnimationLabel) -> bool {
            !self.missing.contains(&label)
        }
        fn play(&mut self, label: AnimationLabel, fade_in: f32) {
            assert_eq!(fade_in, ANIMATION_FADE);
            self.calls.push(("play", label));
        }
        fn stop(&mut self, label: AnimationLabel, fade_out: f32) {
            assert_eq!(fade_out, ANIMATION_FADE);
            self.calls.push(("stop", label));
        }
    }

    #[test]
    fn test_stop_on_replace() {
        let mut driver = AnimationDriver::new();
        let mut player = Recorder::default();

        driver.request(AnimationLabel::Idle, &mut player);
        driver.request(AnimationLabel::Walk, &mut player);

        assert_eq!(
            player.calls,
            vec![
                ("play", AnimationLabel::Idle),
                ("stop", AnimationLabel::Idle),
                ("play", AnimationLabel::Walk),
            ]
        );
    }

    #[test]
    fn test_same_label_is_debounced() {
        let mut driver = AnimationDriver::new();
        let mut player = Recorder::default();

        assert!(driver.request(AnimationLabel::Run, &mut player));
        assert!(!driver.request(AnimationLabel::Run, &mut player));
        assert_eq!(player.calls.len(), 1);
    }

    #[test]
    fn test_missing_clip_skipped_but_previous_stopped() {
        let mut driver = AnimationDriver::new();
        let mut player = Recorder {
            missing: vec![AnimationLabel::Wave],
            ..Recorder::default()
        };

        driver.request(AnimationLabel::Idle, &mut player);
        driver.request(AnimationLabel::Wave, &mut player);

        assert_eq!(driver.current(), Some(AnimationLabel::Wave));
        assert_eq!(driver.playing(), None);
        assert_eq!(player.calls.last(), Some(&("stop", AnimationLabel::Idle)));

        // Nothing left to stop on the next switch
        driver.request(AnimationLabel::Walk, &mut player);
        assert_eq!(player.calls.last(), Some(&("play", AnimationLabel::Walk)));
        assert_eq!(player.calls.iter().filter(|c| c.0 == "stop").count(), 1);
    }

    #[test]
    fn test_mixer_cross_fades() {
        let mut driver = AnimationDriver::new();
        let mut mixer = CrossFadeMixer::new();

        driver.request(AnimationLabel::Idle, &mut mixer);
        mixer.advance(1.0);
        assert_eq!(mixer.weight(AnimationLabel::Idle), 1.0);

        driver.request(AnimationLabel::Walk, &mut mixer);
        mixer.advance(0.25);
        assert!((mixer.weight(AnimationLabel::Idle) - 0.5).abs() < 1e-6);
        assert!((mixer.weight(AnimationLabel::Walk) - 0.5).abs() < 1e-6);

        mixer.advance(0.25);
        assert!(!mixer.is_active(AnimationLabel::Idle));
        assert_eq!(mixer.weight(AnimationLabel::Walk), 1.0);
    }

    #[test]
    fn test_locomotion_labels() {
        assert_eq!(AnimationLabel::from(Locomotion::Run).as_str(), "Run");
        assert_eq!(AnimationLabel::from(Locomotion::Idle), AnimationLabel::Idle);
    }
}
