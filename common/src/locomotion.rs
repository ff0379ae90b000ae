use crate::input::InputState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
pub const DEFAULT_ROTATE_SPEED: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Units per second along the facing direction.
    pub move_speed: f32,
    /// Radians per second of yaw.
    pub rotate_speed: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            rotate_speed: DEFAULT_ROTATE_SPEED,
        }
    }
}

/// Ground-plane position and heading. Height is owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharacterTransform {
    pub x: f32,
    pub z: f32,
    /// Radians about the vertical axis. Not normalized.
    pub yaw: f32,
}

impl CharacterTransform {
    pub fn new(x: f32, z: f32, yaw: f32) -> Self {
        Self { x, z, yaw }
    }

    /// Unit facing direction on the ground plane as `(x, z)`.
    pub fn forward(&self) -> (f32, f32) {
        (self.yaw.sin(), self.yaw.cos())
    }
}

/// Kinematic integration of yaw and position from the four movement flags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionController {
    transform: CharacterTransform,
    tuning: LocomotionTuning,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self::with_transform(CharacterTransform::default(), tuning)
    }

    pub fn with_transform(transform: CharacterTransform, tuning: LocomotionTuning) -> Self {
        Self { transform, tuning }
    }

    pub fn transform(&self) -> CharacterTransform {
        self.transform
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    /// Rotation is applied before translation, so a frame that turns and
    /// moves translates along the new heading.
    pub fn tick(&mut self, delta: f32, input: &InputState) -> CharacterTransform {
        let rotate_step = self.tuning.rotate_speed * delta;
        let move_step = self.tuning.move_speed * delta;
        let transform = &mut self.transform;

        if input.left {
            transform.yaw -= rotate_step;
        }
        if input.right {
            transform.yaw += rotate_step;
        }

        let (dx, dz) = transform.forward();
        if input.forward {
            transform.x += dx * move_step;
            transform.z += dz * move_step;
        }
        if input.backward {
            transform.x -= dx * move_step;
            transform.z -= dz * move_step;
        }

        *transform
    }
}
