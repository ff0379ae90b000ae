use crate::clip::{ClipBindings, ClipId};
use crate::mixer::{ClipMixer, ClipWeights};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FADE_SECONDS: f32 = 0.3;
pub const DEFAULT_IDLE_SWAP_SECONDS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// Length of every crossfade.
    pub fade_seconds: f32,
    /// Time spent idle before switching to the other idle clip.
    pub idle_swap_seconds: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            fade_seconds: DEFAULT_FADE_SECONDS,
            idle_swap_seconds: DEFAULT_IDLE_SWAP_SECONDS,
        }
    }
}

/// Which clip is the steady-state animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    IdleA,
    IdleB,
    Walking,
}

impl AnimationState {
    pub fn clip(self) -> ClipId {
        match self {
            AnimationState::IdleA => ClipId::IdleA,
            AnimationState::IdleB => ClipId::IdleB,
            AnimationState::Walking => ClipId::Walk,
        }
    }

    pub fn is_idle(self) -> bool {
        !matches!(self, AnimationState::Walking)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdleClip {
    A,
    B,
}

impl IdleClip {
    fn other(self) -> Self {
        match self {
            IdleClip::A => IdleClip::B,
            IdleClip::B => IdleClip::A,
        }
    }

    fn clip(self) -> ClipId {
        match self {
            IdleClip::A => ClipId::IdleA,
            IdleClip::B => ClipId::IdleB,
        }
    }
}

// The idle timer only exists while idling.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle { clip: IdleClip, elapsed: f32 },
    Walking,
}

impl Phase {
    fn idle(clip: IdleClip) -> Self {
        Phase::Idle { clip, elapsed: 0.0 }
    }
}

/// A transition started this frame: `from` fades out while `to` restarts and fades in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossfade {
    pub from: ClipId,
    pub to: ClipId,
    pub duration: f32,
}

/// Chooses the steady-state clip from movement intent and idle time, and
/// crossfades between clips.
///
/// At most one crossfade starts per [`tick`](Self::tick). Clips without a bound
/// animation never gain weight, but the state still advances through them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationController {
    phase: Phase,
    mixer: ClipMixer,
    tuning: AnimationTuning,
}

impl AnimationController {
    pub fn new(bindings: ClipBindings, tuning: AnimationTuning) -> Self {
        for (clip, binding) in bindings.iter() {
            if binding.is_none() {
                log::warn!("clip '{clip}' has no bound animation; its transitions will be silent");
            }
        }

        let mut mixer = ClipMixer::new(&bindings);
        mixer.play(ClipId::IdleA);

        Self {
            phase: Phase::idle(IdleClip::A),
            mixer,
            tuning,
        }
    }

    pub fn state(&self) -> AnimationState {
        match self.phase {
            Phase::Idle {
                clip: IdleClip::A, ..
            } => AnimationState::IdleA,
            Phase::Idle {
                clip: IdleClip::B, ..
            } => AnimationState::IdleB,
            Phase::Walking => AnimationState::Walking,
        }
    }

    /// Seconds accumulated toward the next idle swap. Always 0 while walking.
    pub fn idle_timer(&self) -> f32 {
        match self.phase {
            Phase::Idle { elapsed, .. } => elapsed,
            Phase::Walking => 0.0,
        }
    }

    pub fn tuning(&self) -> &AnimationTuning {
        &self.tuning
    }

    pub fn mixer(&self) -> &ClipMixer {
        &self.mixer
    }

    pub fn is_bound(&self, clip: ClipId) -> bool {
        self.mixer.is_bound(clip)
    }

    pub fn weights(&self) -> ClipWeights {
        self.mixer.weights()
    }

    /// Progress running fades and play time without evaluating transitions.
    pub fn advance_blend(&mut self, delta: f32) {
        self.mixer.advance(delta);
    }

    pub fn tick(&mut self, delta: f32, is_moving: bool) -> Option<Crossfade> {
        self.advance_blend(delta);

        if !is_moving {
            if let Some(crossfade) = self.tick_idle_variety(delta) {
                return Some(crossfade);
            }
        }

        match (self.phase, is_moving) {
            (Phase::Idle { clip, .. }, true) => {
                self.phase = Phase::Walking;
                Some(self.crossfade(clip.clip(), ClipId::Walk))
            }
            (Phase::Walking, false) => {
                self.phase = Phase::idle(IdleClip::A);
                Some(self.crossfade(ClipId::Walk, ClipId::IdleA))
            }
            _ => None,
        }
    }

    fn tick_idle_variety(&mut self, delta: f32) -> Option<Crossfade> {
        let Phase::Idle { clip, elapsed } = &mut self.phase else {
            return None;
        };

        *elapsed += delta;
        if *elapsed < self.tuning.idle_swap_seconds {
            return None;
        }

        let from = *clip;
        let to = from.other();
        self.phase = Phase::idle(to);
        Some(self.crossfade(from.clip(), to.clip()))
    }

    fn crossfade(&mut self, from: ClipId, to: ClipId) -> Crossfade {
        let duration = self.tuning.fade_seconds;
        self.mixer.fade_out(from, duration);
        self.mixer.restart_with_fade(to, duration);
        log::debug!("animation crossfade {from} -> {to} over {duration:.2}s");
        Crossfade { from, to, duration }
    }
}
