#[derive(bevy::prelude::States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Waiting for the character's animation resources to load or fail.
    #[default]
    Loading,
    Playing,
}
