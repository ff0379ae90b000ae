use super::assets::CharacterAnimationLibrary;
use super::controller::{CharacterController, CharacterFrame, CharacterRoot};
use bevy::prelude::*;
use common::{ClipId, ClipWeights};

/// Marks an animation player inside a character's model and points back at
/// the character root that drives it.
#[derive(Component)]
pub struct CharacterAnimationBound {
    pub root: Entity,
}

/// Attach the shared graph to animation players that appear under a character
/// once its scene has spawned, starting whichever clips currently carry weight.
pub fn bind_character_animation_players(
    mut commands: Commands,
    library: Option<Res<CharacterAnimationLibrary>>,
    characters: Query<&CharacterController, With<CharacterRoot>>,
    parents: Query<&ChildOf>,
    mut players: Query<(Entity, &mut AnimationPlayer), Without<CharacterAnimationBound>>,
) {
    let Some(library) = library else {
        return;
    };

    for (entity, mut player) in &mut players {
        let Some(root) = find_character_root(entity, &parents, &characters) else {
            continue;
        };
        let Ok(controller) = characters.get(root) else {
            continue;
        };

        apply_clip_weights(&mut player, &library, &controller.rig.weights(), None);
        commands.entity(entity).insert((
            AnimationGraphHandle(library.graph.clone()),
            CharacterAnimationBound { root },
        ));
    }
}

/// Push the latest clip weights into every bound player, restarting the
/// incoming clip of a crossfade.
pub fn apply_character_animation(
    library: Option<Res<CharacterAnimationLibrary>>,
    frames: Query<&CharacterFrame, With<CharacterRoot>>,
    mut players: Query<(&CharacterAnimationBound, &mut AnimationPlayer)>,
) {
    let Some(library) = library else {
        return;
    };

    for (bound, mut player) in &mut players {
        let Ok(frame) = frames.get(bound.root) else {
            continue;
        };
        let Some(output) = frame.latest else {
            continue;
        };

        let restarted = output.crossfade.map(|crossfade| crossfade.to);
        apply_clip_weights(&mut player, &library, &output.weights, restarted);
    }
}

fn apply_clip_weights(
    player: &mut AnimationPlayer,
    library: &CharacterAnimationLibrary,
    weights: &ClipWeights,
    restarted: Option<ClipId>,
) {
    for (clip, node) in library.nodes.iter() {
        let Some(node) = *node else {
            continue;
        };

        match *weights.get(clip) {
            Some(weight) => {
                if restarted == Some(clip) || !player.is_playing_animation(node) {
                    player.start(node).repeat();
                }
                if let Some(animation) = player.animation_mut(node) {
                    animation.set_weight(weight);
                }
            }
            None => {
                if player.is_playing_animation(node) {
                    player.stop(node);
                }
            }
        }
    }
}

fn find_character_root(
    entity: Entity,
    parents: &Query<&ChildOf>,
    characters: &Query<&CharacterController, With<CharacterRoot>>,
) -> Option<Entity> {
    let mut current = entity;
    loop {
        if characters.contains(current) {
            return Some(current);
        }
        current = parents.get(current).ok()?.parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{ClipBindings, ClipSet};

    fn library() -> CharacterAnimationLibrary {
        CharacterAnimationLibrary {
            graph: Handle::default(),
            nodes: ClipSet::new(
                Some(AnimationNodeIndex::new(1)),
                None,
                Some(AnimationNodeIndex::new(2)),
            ),
            bindings: ClipBindings::all(1.0),
            model: None,
        }
    }

    #[test]
    fn weighted_clips_play_and_unweighted_clips_stop() {
        let library = library();
        let idle_a = AnimationNodeIndex::new(1);
        let walk = AnimationNodeIndex::new(2);
        let mut player = AnimationPlayer::default();

        let blended = ClipSet::new(Some(0.75), None, Some(0.25));
        apply_clip_weights(&mut player, &library, &blended, None);
        assert_eq!(player.animation(idle_a).map(|a| a.weight()), Some(0.75));
        assert_eq!(player.animation(walk).map(|a| a.weight()), Some(0.25));

        let walking = ClipSet::new(None, None, Some(1.0));
        apply_clip_weights(&mut player, &library, &walking, None);
        assert!(!player.is_playing_animation(idle_a));
        assert!(player.is_playing_animation(walk));
    }

    #[test]
    fn crossfade_target_restarts_from_the_beginning() {
        let library = library();
        let walk = AnimationNodeIndex::new(2);
        let mut player = AnimationPlayer::default();
        player.start(walk).repeat().seek_to(0.6);

        let weights = ClipSet::new(Some(1.0), None, Some(0.0));
        apply_clip_weights(&mut player, &library, &weights, None);
        assert_eq!(player.animation(walk).map(|a| a.seek_time()), Some(0.6));

        apply_clip_weights(&mut player, &library, &weights, Some(ClipId::Walk));
        assert_eq!(player.animation(walk).map(|a| a.seek_time()), Some(0.0));
    }
}
