//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::flares::FlaresPlugin;

pub mod core;
pub mod flares;
pub mod physics;
pub mod player;
pub mod targets;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;
pub mod ui;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    targets::plugin(app);
    app.add_plugins(FlaresPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    world::render::plugin(app);
    targets::render_plugin(app);
    lighting::plugin(app);
    camera::plugin(app);
    ui::plugin(app);
}
