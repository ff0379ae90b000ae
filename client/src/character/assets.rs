use crate::AppState;
use crate::settings::SettingsResource;
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use common::{ClipBinding, ClipBindings, ClipId, ClipSet};

/// The three glTF resources requested on entering [`AppState::Loading`].
#[derive(Resource)]
pub struct CharacterAssetHandles {
    pub gltfs: ClipSet<Handle<Gltf>>,
}

/// Animation graph shared by every character, built once all resources have
/// settled.
#[derive(Resource, Clone)]
pub struct CharacterAnimationLibrary {
    pub graph: Handle<AnimationGraph>,
    pub nodes: ClipSet<Option<AnimationNodeIndex>>,
    pub bindings: ClipBindings,
    /// Rendered model, taken from the walking resource.
    pub model: Option<Handle<Scene>>,
}

enum GltfStatus<'a> {
    Pending,
    Loaded(&'a Gltf),
    Failed,
}

pub fn request_character_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<SettingsResource>,
) {
    let paths = &settings.current.assets;
    info!(
        "Loading character animations: walk='{}', idle_a='{}', idle_b='{}'",
        paths.walking, paths.idle_a, paths.idle_b
    );

    commands.insert_resource(CharacterAssetHandles {
        gltfs: ClipSet::new(
            asset_server.load(paths.idle_a.clone()),
            asset_server.load(paths.idle_b.clone()),
            asset_server.load(paths.walking.clone()),
        ),
    });
}

/// Wait until every resource is loaded or failed, then build the library and
/// enter [`AppState::Playing`].
pub fn resolve_character_animations(
    mut commands: Commands,
    handles: Option<Res<CharacterAssetHandles>>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    clips: Res<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handles) = handles else {
        return;
    };

    let mut loaded = ClipSet::<Option<&Gltf>>::default();
    for (clip, handle) in handles.gltfs.iter() {
        match gltf_status(handle, &gltfs, &clips, &asset_server) {
            GltfStatus::Pending => return,
            GltfStatus::Loaded(gltf) => *loaded.get_mut(clip) = Some(gltf),
            GltfStatus::Failed => {
                warn!("Animation resource for clip '{clip}' failed to load; it stays unbound");
            }
        }
    }

    let mut graph = AnimationGraph::new();
    let mut nodes = ClipSet::<Option<AnimationNodeIndex>>::default();
    let mut bindings = ClipBindings::default();

    for clip in ClipId::ALL {
        let Some(gltf) = *loaded.get(clip) else {
            continue;
        };
        let Some(animation) = gltf.animations.first() else {
            warn!("Animation resource for clip '{clip}' contains no animations");
            continue;
        };

        let duration = clips.get(animation).map(AnimationClip::duration).unwrap_or(0.0);
        *nodes.get_mut(clip) = Some(graph.add_clip(animation.clone(), 1.0, graph.root));
        *bindings.get_mut(clip) = Some(ClipBinding::new(duration));
    }

    let model = loaded
        .walk
        .and_then(|gltf| gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()));
    if model.is_none() {
        warn!("Walking resource has no scene; the character will not be rendered");
    }

    info!(
        "Character animation library ready: {} of {} clip(s) bound",
        bindings.iter().filter(|(_, binding)| binding.is_some()).count(),
        ClipId::ALL.len()
    );

    commands.insert_resource(CharacterAnimationLibrary {
        graph: graphs.add(graph),
        nodes,
        bindings,
        model,
    });
    commands.remove_resource::<CharacterAssetHandles>();
    next_state.set(AppState::Playing);
}

fn gltf_status<'a>(
    handle: &Handle<Gltf>,
    gltfs: &'a Assets<Gltf>,
    clips: &Assets<AnimationClip>,
    asset_server: &AssetServer,
) -> GltfStatus<'a> {
    if let Some(gltf) = gltfs.get(handle) {
        // Labeled clips land in their own asset storage; wait for the first one.
        let clip_ready = gltf
            .animations
            .first()
            .is_none_or(|animation| clips.contains(animation));
        return if clip_ready {
            GltfStatus::Loaded(gltf)
        } else {
            GltfStatus::Pending
        };
    }

    match asset_server.load_state(handle) {
        LoadState::Failed(_) => GltfStatus::Failed,
        _ => GltfStatus::Pending,
    }
}
