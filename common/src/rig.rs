use crate::animation::{AnimationController, AnimationTuning, Crossfade};
use crate::clip::ClipBindings;
use crate::input::InputState;
use crate::locomotion::{CharacterTransform, LocomotionController, LocomotionTuning};
use crate::mixer::ClipWeights;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTuning {
    pub animation: AnimationTuning,
    pub locomotion: LocomotionTuning,
}

/// Everything the renderer applies after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub transform: CharacterTransform,
    pub crossfade: Option<Crossfade>,
    pub weights: ClipWeights,
}

/// One character: its animation and locomotion controllers plus whether its
/// scene node is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRig {
    animation: AnimationController,
    locomotion: LocomotionController,
    mounted: bool,
}

impl CharacterRig {
    pub fn new(bindings: ClipBindings, tuning: &CharacterTuning) -> Self {
        Self {
            animation: AnimationController::new(bindings, tuning.animation),
            locomotion: LocomotionController::new(tuning.locomotion),
            mounted: false,
        }
    }

    pub fn with_transform(mut self, transform: CharacterTransform) -> Self {
        let tuning = *self.locomotion.tuning();
        self.locomotion = LocomotionController::with_transform(transform, tuning);
        self
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    pub fn transform(&self) -> CharacterTransform {
        self.locomotion.transform()
    }

    pub fn weights(&self) -> ClipWeights {
        self.animation.weights()
    }

    /// Runs one frame. While unmounted only running fades progress and `None`
    /// is returned; the next mounted frame picks up from the same state.
    pub fn tick(&mut self, delta: f32, input: &InputState) -> Option<FrameOutput> {
        if !self.mounted {
            self.animation.advance_blend(delta);
            return None;
        }

        let crossfade = self.animation.tick(delta, input.is_moving());
        let transform = self.locomotion.tick(delta, input);

        Some(FrameOutput {
            transform,
            crossfade,
            weights: self.animation.weights(),
        })
    }
}
