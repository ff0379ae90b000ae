use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use client::character::{
    CharacterController, CharacterFrame, CharacterInput, CharacterRoot, drive_characters,
};
use common::{AnimationState, CharacterRig, CharacterTuning, ClipBindings, SharedInputState};

fn drive_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .add_systems(Update, drive_characters);
    app
}

fn spawn_character(app: &mut App, mounted: bool) -> (Entity, SharedInputState) {
    let mut rig = CharacterRig::new(ClipBindings::all(1.0), &CharacterTuning::default());
    if mounted {
        rig.mount();
    }
    let shared = SharedInputState::new();

    let entity = app
        .world_mut()
        .spawn((
            CharacterRoot,
            Transform::default(),
            CharacterController { rig },
            CharacterInput {
                shared: shared.clone(),
                subscription: None,
            },
            CharacterFrame::default(),
        ))
        .id();
    (entity, shared)
}

#[test]
fn forward_input_walks_and_moves_the_transform() {
    let mut app = drive_app();
    let (entity, shared) = spawn_character(&mut app, true);

    shared.update(|input| input.forward = true);
    for _ in 0..4 {
        app.update();
    }

    let world = app.world();
    let controller = world.get::<CharacterController>(entity).unwrap();
    let transform = world.get::<Transform>(entity).unwrap();

    assert_eq!(controller.rig.animation().state(), AnimationState::Walking);
    assert!(transform.translation.z > 0.0);
    assert_eq!(transform.translation.z, controller.rig.transform().z);
    assert_eq!(transform.translation.x, 0.0);
    assert!(world.get::<CharacterFrame>(entity).unwrap().latest.is_some());
}

#[test]
fn releasing_forward_returns_to_idle() {
    let mut app = drive_app();
    let (entity, shared) = spawn_character(&mut app, true);

    shared.update(|input| input.forward = true);
    app.update();
    app.update();
    shared.update(|input| input.forward = false);
    app.update();

    let controller = app.world().get::<CharacterController>(entity).unwrap();
    assert_eq!(controller.rig.animation().state(), AnimationState::IdleA);
}

#[test]
fn turning_rotates_about_the_vertical_axis() {
    let mut app = drive_app();
    let (entity, shared) = spawn_character(&mut app, true);

    shared.update(|input| input.right = true);
    for _ in 0..3 {
        app.update();
    }

    let world = app.world();
    let yaw = world.get::<CharacterController>(entity).unwrap().rig.transform().yaw;
    let transform = world.get::<Transform>(entity).unwrap();

    assert!(yaw > 0.0);
    assert!(transform.rotation.angle_between(Quat::from_rotation_y(yaw)) < 1e-4);
    assert_eq!(transform.translation, Vec3::ZERO);
}

#[test]
fn unmounted_character_is_left_in_place() {
    let mut app = drive_app();
    let (entity, shared) = spawn_character(&mut app, false);

    shared.update(|input| input.forward = true);
    for _ in 0..3 {
        app.update();
    }

    let world = app.world();
    assert_eq!(world.get::<Transform>(entity).unwrap(), &Transform::default());
    assert!(world.get::<CharacterFrame>(entity).unwrap().latest.is_none());
}
