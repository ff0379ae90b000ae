use super::assets::CharacterAnimationLibrary;
use super::controller::{CharacterController, CharacterFrame, CharacterInput, CharacterRoot};
use super::input::KeyboardHub;
use crate::settings::GameSettings;
use bevy::prelude::*;
use common::{CharacterRig, InputState, SharedInputState, bind_input_state};

pub struct CharacterFactory;

impl CharacterFactory {
    /// Spawn the character root and, when a model is available, its scene
    /// child. The rig is mounted and subscribed to the keyboard only when the
    /// scene node exists.
    pub fn spawn(
        commands: &mut Commands,
        hub: &mut KeyboardHub,
        library: &CharacterAnimationLibrary,
        settings: &GameSettings,
    ) -> Entity {
        let mut rig = CharacterRig::new(library.bindings, &settings.character.tuning());
        let shared = SharedInputState::new();

        let root = commands
            .spawn((
                Name::new("Character"),
                CharacterRoot,
                Transform::default(),
                Visibility::default(),
                CharacterFrame::default(),
            ))
            .id();

        let subscription = match &library.model {
            Some(scene) => {
                commands.spawn((
                    SceneRoot(scene.clone()),
                    Transform::from_scale(Vec3::splat(settings.character.model_scale)),
                    ChildOf(root),
                ));
                rig.mount();
                Some(bind_input_state(
                    &mut hub.0,
                    shared.clone(),
                    settings.controls.clone(),
                ))
            }
            None => {
                warn!("No character model available; the character stays unmounted");
                None
            }
        };

        commands.entity(root).insert((
            CharacterController { rig },
            CharacterInput {
                shared,
                subscription,
            },
        ));

        root
    }

    /// Release the keyboard subscription, unmount the rig and despawn the
    /// character with its model.
    pub fn despawn(
        commands: &mut Commands,
        hub: &mut KeyboardHub,
        root: Entity,
        controller: &mut CharacterController,
        input: &mut CharacterInput,
    ) {
        if let Some(subscription) = input.subscription.take() {
            hub.0.unsubscribe(subscription);
        }
        input.shared.update(InputState::clear);
        controller.rig.unmount();
        commands.entity(root).despawn();
    }
}
