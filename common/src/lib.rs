//! Character animation and locomotion core.
//!
//! This crate holds the rendering-independent part of a controllable
//! character: which of the three clips (idle A, idle B, walk) is playing, the
//! crossfades between them, the idle-variety timer, and the kinematic
//! integration of position and yaw from keyboard flags.
//!
//! A renderer drives it once per frame through [`CharacterRig::tick`] and
//! applies the returned transform and clip weights to its scene node and
//! skeleton.

pub mod animation;
pub mod clip;
pub mod hub;
pub mod input;
pub mod locomotion;
pub mod mixer;
pub mod rig;

pub use animation::{AnimationController, AnimationState, AnimationTuning, Crossfade};
pub use clip::{ClipBinding, ClipBindings, ClipId, ClipSet};
pub use hub::{KeyEventHub, SubscriptionId, bind_input_state};
pub use input::{InputState, KeyAction, KeyBindings, KeyEvent, MovementKey, SharedInputState};
pub use locomotion::{CharacterTransform, LocomotionController, LocomotionTuning};
pub use mixer::{ClipMixer, ClipWeights};
pub use rig::{CharacterRig, CharacterTuning, FrameOutput};
