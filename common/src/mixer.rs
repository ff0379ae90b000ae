//! Weight and play-time bookkeeping for the three clip actions.
//!
//! The mixer is what the renderer reads each frame: every enabled action
//! contributes its current weight to the skeleton pose. Fades are linear and
//! run on the mixer's own clock, so a fade started in one frame begins to
//! progress on the next `advance`.

use crate::clip::{ClipBindings, ClipId, ClipSet};

/// Per-clip blend weights. `None` means the action is disabled or unbound.
pub type ClipWeights = ClipSet<Option<f32>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Fade {
    fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }
}

/// Live state of one bound clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState {
    enabled: bool,
    time: f32,
    weight: f32,
    fade: Option<Fade>,
    duration: f32,
}

impl ActionState {
    fn new(duration: f32) -> Self {
        Self {
            enabled: false,
            time: 0.0,
            weight: 0.0,
            fade: None,
            duration,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn effective_weight(&self) -> f32 {
        if self.enabled { self.weight } else { 0.0 }
    }

    fn advance(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }

        self.time += delta;
        if self.duration > 0.0 {
            self.time %= self.duration;
        }

        let Some(mut fade) = self.fade.take() else {
            return;
        };
        fade.elapsed += delta;
        self.weight = fade.value();
        if fade.progress() < 1.0 {
            self.fade = Some(fade);
        } else if self.weight <= 0.0 {
            self.weight = 0.0;
            self.enabled = false;
        }
    }
}

/// Owns one action per bound clip. Operations on unbound clips are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipMixer {
    actions: ClipSet<Option<ActionState>>,
}

impl ClipMixer {
    pub fn new(bindings: &ClipBindings) -> Self {
        Self {
            actions: bindings.map(|_, binding| {
                binding.map(|binding| ActionState::new(binding.duration_seconds))
            }),
        }
    }

    pub fn action(&self, clip: ClipId) -> Option<&ActionState> {
        self.actions.get(clip).as_ref()
    }

    pub fn is_bound(&self, clip: ClipId) -> bool {
        self.actions.get(clip).is_some()
    }

    pub fn is_enabled(&self, clip: ClipId) -> bool {
        self.action(clip).is_some_and(ActionState::is_enabled)
    }

    /// Enables the action at full weight without a fade. Play time is kept.
    pub fn play(&mut self, clip: ClipId) {
        if let Some(action) = self.actions.get_mut(clip) {
            action.enabled = true;
            action.weight = 1.0;
            action.fade = None;
        }
    }

    /// Rewinds the action to time 0 and cancels any running fade.
    pub fn reset(&mut self, clip: ClipId) {
        if let Some(action) = self.actions.get_mut(clip) {
            action.enabled = true;
            action.time = 0.0;
            action.fade = None;
        }
    }

    pub fn fade_in(&mut self, clip: ClipId, duration: f32) {
        if let Some(action) = self.actions.get_mut(clip) {
            action.enabled = true;
            action.weight = 0.0;
            action.fade = Some(Fade::new(0.0, 1.0, duration));
            if duration <= 0.0 {
                action.weight = 1.0;
                action.fade = None;
            }
        }
    }

    /// Fades the action's current weight to zero. The action stays enabled
    /// until the fade completes.
    ///
    /// Interrupting a fade-in starts the ramp from the weight reached so far,
    /// not from 1, so an interrupted crossfade never jumps up in weight.
    pub fn fade_out(&mut self, clip: ClipId, duration: f32) {
        let Some(action) = self.actions.get_mut(clip) else {
            return;
        };
        if !action.enabled {
            return;
        }
        if duration <= 0.0 {
            action.weight = 0.0;
            action.fade = None;
            action.enabled = false;
            return;
        }
        action.fade = Some(Fade::new(action.weight, 0.0, duration));
    }

    /// Restart `clip` from time 0 and fade it in. The `reset().fadeIn().play()`
    /// sequence used for every incoming clip.
    pub fn restart_with_fade(&mut self, clip: ClipId, duration: f32) {
        self.reset(clip);
        self.fade_in(clip, duration);
    }

    pub fn advance(&mut self, delta: f32) {
        if delta <= 0.0 {
            return;
        }
        for clip in ClipId::ALL {
            if let Some(action) = self.actions.get_mut(clip) {
                action.advance(delta);
            }
        }
    }

    pub fn weights(&self) -> ClipWeights {
        self.actions.map(|_, action| {
            action
                .as_ref()
                .filter(|action| action.enabled)
                .map(ActionState::effective_weight)
        })
    }

    pub fn time(&self, clip: ClipId) -> Option<f32> {
        self.action(clip).map(ActionState::time)
    }
}
