//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::config::{FlareConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::common::error::ConfigError;
use crate::common::state::GameState;
use crate::plugins;

/// Config file the binary reads: `$FLARES_CONFIG`, else `flares.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load and validate the config, then run the full app.
///
/// An invalid config never reaches the simulation.
pub fn run() -> Result<(), ConfigError> {
    let config = FlareConfig::load_or_default(&config_path())?;
    App::new()
        .insert_resource(config)
        .add_plugins(configure_full)
        .run();
    Ok(())
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flares".into(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (lighting/camera/HUD).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
