//! Lighting plugin (render-only).
//!
//! Mirrors the voxel grid's lit markers as point lights. The grid stays the
//! source of truth; this module only diffs against it.
//!
//! ```text
//! FlareLights: cell -> light entity
//! lit marker without entity   -> spawn PointLight (+ debug cube)
//! entity without lit marker   -> despawn
//! new Flare                   -> small emissive mesh
//! FlareBroadcast::Shattered   -> brief fading flash
//! ```

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::config::FlareConfig;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::flares::messages::{FlareBroadcast, FlareEvent};
use crate::plugins::flares::Flare;
use crate::plugins::world::{cell_center, VoxelGrid};

/// Light entity spawned for a lit marker cell.
#[derive(Component)]
pub struct MarkerLight;

#[derive(Resource, Default)]
struct FlareLights(HashMap<IVec3, Entity>);

/// Short-lived light left where a flare shattered.
#[derive(Component)]
struct ShatterFlash {
    timer: Timer,
    peak: f32,
}

const FLASH_SECS: f32 = 0.35;

/// Handles reused by every debug cube / flare mesh.
#[derive(Resource)]
struct LightingAssets {
    debug_cube: Handle<Mesh>,
    debug_material: Handle<StandardMaterial>,
    flare_mesh: Handle<Mesh>,
    flare_material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<FlareLights>()
        .add_systems(Startup, load_assets)
        .add_systems(
            Update,
            (sync_marker_lights, dress_flares, flash_on_shatter, fade_flashes)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Intensity of a marker light for a configured level (1..=16).
pub fn intensity_for_level(level: u8) -> f32 {
    // Quadratic so low levels are dim embers and 15-16 read as a flare.
    let l = f32::from(level) / 16.0;
    120_000.0 * l * l
}

fn load_assets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(LightingAssets {
        debug_cube: meshes.add(Cuboid::from_length(0.25)),
        debug_material: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.9, 0.2, 0.5),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        }),
        flare_mesh: meshes.add(Sphere::new(tunables.flare_radius)),
        flare_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.45, 0.15),
            emissive: LinearRgba::rgb(8.0, 3.0, 0.8),
            ..default()
        }),
    });
}

fn sync_marker_lights(
    mut commands: Commands,
    config: Res<FlareConfig>,
    grid: Res<VoxelGrid>,
    assets: Res<LightingAssets>,
    mut lights: ResMut<FlareLights>,
) {
    lights.0.retain(|cell, e| {
        let still_lit = grid.light_marker(*cell).is_some_and(|m| m.lit);
        if !still_lit {
            commands.entity(*e).despawn();
        }
        still_lit
    });

    for (cell, marker) in grid.light_markers() {
        if !marker.lit || lights.0.contains_key(&cell) {
            continue;
        }

        let mut light = commands.spawn((
            MarkerLight,
            PointLight {
                color: Color::srgb(1.0, 0.55, 0.25),
                intensity: intensity_for_level(config.flare_light_level),
                range: f32::from(config.flare_light_level),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(cell_center(cell)),
            DespawnOnExit(GameState::InGame),
        ));

        if config.light_block_debug {
            light.insert((
                Mesh3d(assets.debug_cube.clone()),
                MeshMaterial3d(assets.debug_material.clone()),
            ));
        }

        lights.0.insert(cell, light.id());
    }
}

fn dress_flares(mut commands: Commands, assets: Res<LightingAssets>, q_new: Query<Entity, Added<Flare>>) {
    for e in &q_new {
        commands.entity(e).insert((
            Mesh3d(assets.flare_mesh.clone()),
            MeshMaterial3d(assets.flare_material.clone()),
        ));
    }
}

fn flash_on_shatter(
    mut commands: Commands,
    config: Res<FlareConfig>,
    mut broadcasts: MessageReader<FlareBroadcast>,
) {
    for msg in broadcasts.read() {
        if msg.event != FlareEvent::Shattered {
            continue;
        }
        let peak = intensity_for_level(config.flare_light_level) * 2.0;
        commands.spawn((
            ShatterFlash {
                timer: Timer::from_seconds(FLASH_SECS, TimerMode::Once),
                peak,
            },
            PointLight {
                color: Color::srgb(1.0, 0.75, 0.4),
                intensity: peak,
                range: 6.0,
                ..default()
            },
            Transform::from_translation(msg.at),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn fade_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut ShatterFlash, &mut PointLight)>,
) {
    for (e, mut flash, mut light) in &mut q {
        flash.timer.tick(time.delta());
        if flash.timer.is_finished() {
            commands.entity(e).despawn();
            continue;
        }
        light.intensity = flash.peak * (1.0 - flash.timer.fraction());
    }
}
