pub mod animation;
pub mod assets;
pub mod controller;
pub mod factory;
pub mod input;
pub mod movement;

pub use animation::{
    CharacterAnimationBound, apply_character_animation, bind_character_animation_players,
};
pub use assets::{
    CharacterAnimationLibrary, CharacterAssetHandles, request_character_assets,
    resolve_character_animations,
};
pub use controller::{CharacterController, CharacterFrame, CharacterInput, CharacterRoot};
pub use factory::CharacterFactory;
pub use input::{KeyboardHub, forward_keyboard_input, key_event_from};
pub use movement::{apply_character_transform, drive_characters};

use crate::AppState;
use crate::settings::SettingsResource;
use bevy::prelude::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyboardHub>()
            .add_systems(OnEnter(AppState::Loading), request_character_assets)
            .add_systems(
                Update,
                resolve_character_animations.run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnEnter(AppState::Playing), spawn_character)
            .add_systems(OnExit(AppState::Playing), despawn_characters)
            .add_systems(
                Update,
                (
                    forward_keyboard_input,
                    drive_characters,
                    bind_character_animation_players,
                    apply_character_animation,
                )
                    .chain()
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

pub fn spawn_character(
    mut commands: Commands,
    mut hub: ResMut<KeyboardHub>,
    library: Res<CharacterAnimationLibrary>,
    settings: Res<SettingsResource>,
) {
    let root = CharacterFactory::spawn(&mut commands, &mut hub, &library, &settings.current);
    info!("Spawned character {root:?}");
}

pub fn despawn_characters(
    mut commands: Commands,
    mut hub: ResMut<KeyboardHub>,
    mut characters: Query<
        (Entity, &mut CharacterController, &mut CharacterInput),
        With<CharacterRoot>,
    >,
) {
    for (entity, mut controller, mut input) in &mut characters {
        CharacterFactory::despawn(&mut commands, &mut hub, entity, &mut controller, &mut input);
    }
}
