use bevy::prelude::*;
use bevy::state::app::AppExtStates;

use crate::AppState;
use crate::app::plugins::{build_bevy_plugins, create_winit_settings};
use crate::character::CharacterPlugin;
use crate::settings::{self, GameSettings, SettingsResource};
use crate::world::WorldPlugin;

pub fn run_client_app() {
    let startup_settings = load_startup_settings();
    let mut app = App::new();
    configure_client_app(&mut app, &startup_settings);
    app.run();
}

pub fn configure_client_app(app: &mut App, startup_settings: &GameSettings) {
    app.insert_resource(SettingsResource::new(startup_settings.clone()))
        .add_plugins(build_bevy_plugins(startup_settings))
        .insert_resource(create_winit_settings(startup_settings))
        .init_state::<AppState>()
        .add_plugins(WorldPlugin)
        .add_plugins(CharacterPlugin);
}

fn load_startup_settings() -> GameSettings {
    let startup_settings = settings::load_settings_or_default();
    if let Err(error) = settings::ensure_settings_file_exists(&startup_settings) {
        eprintln!(
            "Failed to ensure startup settings file '{}': {}",
            settings::SETTINGS_FILE_PATH,
            error
        );
    }
    startup_settings
}
