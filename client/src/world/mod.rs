pub mod camera;

use crate::grid_overlay::{GridOverlayConfig, draw_grid_overlay};
use camera::{OrbitCamera, control_orbit_camera};
use bevy::camera::{ClearColorConfig, PerspectiveProjection, Projection};
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.0, 5.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const SUN_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

#[derive(Component)]
pub struct WorldCamera;

#[derive(Component)]
pub struct WorldSun;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldGrid(pub GridOverlayConfig);

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldGrid>()
            .insert_resource(GlobalAmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
                affects_lightmapped_meshes: true,
            })
            .add_systems(Startup, (setup_world_camera, setup_world_light))
            .add_systems(Update, (control_orbit_camera, draw_world_grid));
    }
}

fn setup_world_camera(mut commands: Commands) {
    let orbit = OrbitCamera::looking_at(CAMERA_POSITION, Vec3::ZERO);
    commands.spawn((
        WorldCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.1, 0.1, 0.15)),
            ..Default::default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1_000.0,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
}

fn setup_world_light(mut commands: Commands) {
    commands.spawn((
        WorldSun,
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn draw_world_grid(mut gizmos: Gizmos, grid: Res<WorldGrid>) {
    draw_grid_overlay(&mut gizmos, Vec3::ZERO, grid.0);
}
