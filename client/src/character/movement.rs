use super::controller::{CharacterController, CharacterFrame, CharacterInput, CharacterRoot};
use bevy::prelude::*;
use common::CharacterTransform;

/// Tick every character rig once and write the result to its transform.
pub fn drive_characters(
    time: Res<Time>,
    mut characters: Query<
        (
            &mut Transform,
            &mut CharacterController,
            &CharacterInput,
            &mut CharacterFrame,
        ),
        With<CharacterRoot>,
    >,
) {
    let dt = time.delta_secs();

    for (mut transform, mut controller, input, mut frame) in &mut characters {
        frame.latest = controller.rig.tick(dt, &input.shared.snapshot());
        let Some(output) = frame.latest else {
            continue;
        };
        apply_character_transform(&mut transform, output.transform);
    }
}

pub fn apply_character_transform(transform: &mut Transform, character: CharacterTransform) {
    transform.translation.x = character.x;
    transform.translation.z = character.z;
    transform.rotation = Quat::from_rotation_y(character.yaw);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_maps_to_rotation_about_y() {
        let mut transform = Transform::from_xyz(0.0, 0.5, 0.0);
        apply_character_transform(
            &mut transform,
            CharacterTransform::new(1.0, -2.0, std::f32::consts::FRAC_PI_2),
        );

        assert_eq!(transform.translation, Vec3::new(1.0, 0.5, -2.0));
        let facing = transform.rotation * Vec3::Z;
        assert!((facing - Vec3::X).length() < 1e-5);
    }
}
