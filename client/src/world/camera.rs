use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

const MIN_PITCH: f32 = -1.54;
const MAX_PITCH: f32 = 1.54;

/// Mouse-driven orbit around a fixed target: left drag rotates, the wheel
/// zooms.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl OrbitCamera {
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
            min_distance: 1.0,
            max_distance: 50.0,
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
        }
    }

    pub fn translation(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.target, Vec3::Y)
    }

    pub fn rotate(&mut self, drag: Vec2) {
        self.yaw -= drag.x * self.rotate_sensitivity;
        self.pitch = (self.pitch + drag.y * self.rotate_sensitivity).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance - steps * self.zoom_sensitivity)
            .clamp(self.min_distance, self.max_distance);
    }
}

pub fn control_orbit_camera(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let mut drag = Vec2::ZERO;
    for motion in mouse_motion.read() {
        drag += motion.delta;
    }

    let mut zoom_steps = 0.0;
    for wheel in mouse_wheel.read() {
        let unit_scale = match wheel.unit {
            MouseScrollUnit::Line => 1.0,
            MouseScrollUnit::Pixel => 0.03,
        };
        zoom_steps += wheel.y * unit_scale;
    }

    let rotating = mouse_buttons.pressed(MouseButton::Left);
    if !rotating && zoom_steps == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        if rotating {
            orbit.rotate(drag);
        }
        orbit.zoom(zoom_steps);
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_starting_position() {
        let start = Vec3::new(0.0, 1.0, 5.0);
        let orbit = OrbitCamera::looking_at(start, Vec3::ZERO);

        assert!((orbit.translation() - start).length() < 1e-5);
        assert!((orbit.distance - 26.0_f32.sqrt()).abs() < 1e-5);
        assert_eq!(orbit.yaw, 0.0);
    }

    #[test]
    fn dragging_keeps_distance_and_clamps_pitch() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        orbit.rotate(Vec2::new(200.0, 0.0));
        assert!(orbit.yaw < 0.0);
        assert!((orbit.translation().length() - orbit.distance).abs() < 1e-4);

        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.pitch, MAX_PITCH);
    }

    #[test]
    fn zoom_stays_within_limits() {
        let mut orbit = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        orbit.zoom(2.0);
        assert!((orbit.distance - 4.0).abs() < 1e-5);

        orbit.zoom(100.0);
        assert_eq!(orbit.distance, orbit.min_distance);
        orbit.zoom(-1_000.0);
        assert_eq!(orbit.distance, orbit.max_distance);
    }
}
