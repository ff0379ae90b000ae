use bevy::prelude::*;
use common::{CharacterRig, FrameOutput, SharedInputState, SubscriptionId};

#[derive(Component)]
pub struct CharacterRoot;

#[derive(Component)]
pub struct CharacterController {
    pub rig: CharacterRig,
}

/// Movement flags written by the keyboard hub and read by the frame tick.
#[derive(Component)]
pub struct CharacterInput {
    pub shared: SharedInputState,
    /// `None` while the character has no scene node to drive.
    pub subscription: Option<SubscriptionId>,
}

/// The most recent tick result, consumed by the animation systems.
#[derive(Component, Default)]
pub struct CharacterFrame {
    pub latest: Option<FrameOutput>,
}
