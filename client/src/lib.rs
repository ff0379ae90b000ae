pub mod app;
pub mod character;
pub mod grid_overlay;
pub mod settings;
pub mod world;

pub use app::state::AppState;
