use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, WindowMode};
use bevy::winit::UpdateMode;
use common::{AnimationTuning, CharacterTuning, KeyBindings, LocomotionTuning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const SETTINGS_FILE_PATH: &str = "./settings.yaml";

/// The source character assets are authored in centimetres.
pub const DEFAULT_MODEL_SCALE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowModeSetting {
    #[default]
    Windowed,
    Fullscreen,
}

impl WindowModeSetting {
    pub fn to_bevy(self) -> WindowMode {
        match self {
            Self::Windowed => WindowMode::Windowed,
            Self::Fullscreen => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FpsLimitSetting {
    #[default]
    Default60,
    Monitor,
    Unlimited,
}

impl FpsLimitSetting {
    pub fn to_update_mode(self) -> UpdateMode {
        match self {
            Self::Default60 => UpdateMode::reactive(Duration::from_secs_f64(1.0 / 60.0)),
            Self::Monitor | Self::Unlimited => UpdateMode::Continuous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSetting {
    pub width: u32,
    pub height: u32,
}

impl Default for ResolutionSetting {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    pub window_mode: WindowModeSetting,
    pub resolution: ResolutionSetting,
    pub vsync: bool,
    pub fps_limit: FpsLimitSetting,
}

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            window_mode: WindowModeSetting::Windowed,
            resolution: ResolutionSetting::default(),
            vsync: true,
            fps_limit: FpsLimitSetting::Default60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    pub animation: AnimationTuning,
    pub locomotion: LocomotionTuning,
    pub model_scale: f32,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            animation: AnimationTuning::default(),
            locomotion: LocomotionTuning::default(),
            model_scale: DEFAULT_MODEL_SCALE,
        }
    }
}

impl CharacterSettings {
    pub fn tuning(&self) -> CharacterTuning {
        CharacterTuning {
            animation: self.animation,
            locomotion: self.locomotion,
        }
    }
}

/// Asset-relative paths of the three animation resources. The walking
/// resource also provides the rendered model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub walking: String,
    pub idle_a: String,
    pub idle_b: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            walking: "character/walking.glb".to_string(),
            idle_a: "character/idle_02.glb".to_string(),
            idle_b: "character/idle_03.glb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct GameSettings {
    pub graphics: GraphicsSettings,
    pub character: CharacterSettings,
    pub controls: KeyBindings,
    pub assets: AssetSettings,
}

#[derive(Debug, Error)]
pub enum SettingsIoError {
    #[error("failed to read settings file: {0}")]
    Read(std::io::Error),
    #[error("failed to write settings file: {0}")]
    Write(std::io::Error),
    #[error("failed to decode YAML settings: {0}")]
    Deserialize(serde_yaml::Error),
    #[error("failed to encode YAML settings: {0}")]
    Serialize(serde_yaml::Error),
}

#[derive(Resource, Clone)]
pub struct SettingsResource {
    pub current: GameSettings,
    path: PathBuf,
}

impl SettingsResource {
    pub fn new(current: GameSettings) -> Self {
        Self::with_path(current, SETTINGS_FILE_PATH)
    }

    pub fn with_path(current: GameSettings, path: impl Into<PathBuf>) -> Self {
        Self {
            current,
            path: path.into(),
        }
    }

    pub fn save_to_disk(&self) -> Result<(), SettingsIoError> {
        write_settings_to_path(&self.current, &self.path)
    }
}

pub fn load_settings_or_default() -> GameSettings {
    load_settings_or_default_from(Path::new(SETTINGS_FILE_PATH))
}

pub fn load_settings_or_default_from(path: &Path) -> GameSettings {
    if !path.exists() {
        return GameSettings::default();
    }

    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!(
                "Failed to load settings from '{}': {}. Falling back to defaults.",
                path.display(),
                error
            );
            GameSettings::default()
        }
    }
}

pub fn ensure_settings_file_exists(settings: &GameSettings) -> Result<(), SettingsIoError> {
    ensure_settings_file_at(settings, Path::new(SETTINGS_FILE_PATH))
}

pub fn ensure_settings_file_at(
    settings: &GameSettings,
    path: &Path,
) -> Result<(), SettingsIoError> {
    if path.exists() {
        return Ok(());
    }

    write_settings_to_path(settings, path)
}

pub fn present_mode_for(graphics: &GraphicsSettings) -> PresentMode {
    if matches!(graphics.fps_limit, FpsLimitSetting::Unlimited) {
        PresentMode::AutoNoVsync
    } else if graphics.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    }
}

pub fn load_settings_from_path(path: &Path) -> Result<GameSettings, SettingsIoError> {
    let raw = fs::read_to_string(path).map_err(SettingsIoError::Read)?;
    serde_yaml::from_str::<GameSettings>(&raw).map_err(SettingsIoError::Deserialize)
}

pub fn write_settings_to_path(
    settings: &GameSettings,
    path: &Path,
) -> Result<(), SettingsIoError> {
    let encoded = serde_yaml::to_string(settings).map_err(SettingsIoError::Serialize)?;
    fs::write(path, encoded).map_err(SettingsIoError::Write)
}
