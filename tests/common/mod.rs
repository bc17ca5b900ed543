//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bevy_flares::game::configure_headless` to install gameplay plugins.
//!
//! Ticks are driven by running `FixedUpdate` directly, so tests never depend
//! on wall-clock time.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use bevy_flares::common::config::FlareConfig;

pub fn app_headless() -> App {
    app_headless_with(FlareConfig::default())
}

/// Headless app using `config` instead of the defaults.
pub fn app_headless_with(config: FlareConfig) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    // avian3d builds colliders from meshes; the asset store must exist.
    app.init_asset::<Mesh>();

    app.insert_resource(config);
    bevy_flares::game::configure_headless(&mut app);

    // First update runs the InGame OnEnter systems (terrain, player, targets).
    app.update();
    app
}

/// Run `n` simulation ticks.
pub fn run_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut().query::<&C>().iter(app.world()).count()
}
