//! End-to-end flare life: throw, land, light, burn out, despawn, marker decay.

mod common;

use bevy::prelude::*;
use bevy_flares::common::config::FlareConfig;
use bevy_flares::common::state::Authority;
use bevy_flares::plugins::flares::messages::ThrowFlareRequest;
use bevy_flares::plugins::flares::{Flare, FlarePouch};
use bevy_flares::plugins::player::Player;
use bevy_flares::plugins::world::{VoxelGrid, FLOOR_Y};

fn short_lived() -> FlareConfig {
    FlareConfig {
        light_decay_time: 10,
        entity_decay_time: 5,
        no_source_decay_time: 3,
        ..default()
    }
}

fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .unwrap()
}

/// Drop a flare straight down onto the floor at the origin column.
fn drop_flare(app: &mut App) {
    let thrower = player(app);
    app.world_mut().write_message(ThrowFlareRequest {
        thrower,
        origin: Vec3::new(0.5, FLOOR_Y as f32 + 1.5, 0.5),
        velocity: Vec3::ZERO,
    });
}

fn markers(app: &App) -> Vec<(IVec3, bool)> {
    app.world()
        .resource::<VoxelGrid>()
        .light_markers()
        .map(|(cell, m)| (cell, m.lit))
        .collect()
}

#[test]
fn dropped_flare_lights_burns_out_and_cleans_up() {
    let mut app = common::app_headless_with(short_lived());
    let capacity = app.world().resource::<FlareConfig>().flare_quantity;

    drop_flare(&mut app);
    common::run_ticks(&mut app, 3);

    assert_eq!(common::count::<Flare>(&mut app), 1);
    let pouch = app.world().get::<FlarePouch>(player(&mut app)).unwrap().clone();
    assert_eq!(pouch.count, capacity - 1);

    let floor_cell = IVec3::new(0, FLOOR_Y + 1, 0);
    assert_eq!(markers(&app), vec![(floor_cell, true)]);

    // Light goes out while the flare is still around.
    let mut saw_unlit_with_flare = false;
    for _ in 0..30 {
        common::run_ticks(&mut app, 1);
        let alive = common::count::<Flare>(&mut app) == 1;
        if alive && markers(&app) == vec![(floor_cell, false)] {
            saw_unlit_with_flare = true;
        }
    }
    assert!(saw_unlit_with_flare);

    assert_eq!(common::count::<Flare>(&mut app), 0);
    assert!(markers(&app).is_empty(), "unrefreshed marker should have decayed");
}

#[test]
fn marker_outlives_a_flare_only_by_the_decay_window() {
    let config = FlareConfig {
        light_decay_time: 1000,
        entity_decay_time: 0,
        no_source_decay_time: 4,
        ..default()
    };
    let mut app = common::app_headless_with(config);

    drop_flare(&mut app);
    common::run_ticks(&mut app, 5);
    let flare = app
        .world_mut()
        .query_filtered::<Entity, With<Flare>>()
        .single(app.world())
        .unwrap();

    // Unrefreshed, the marker stands for exactly `no_source_decay_time` ticks.
    app.world_mut().despawn(flare);
    common::run_ticks(&mut app, 3);
    assert_eq!(markers(&app).len(), 1);

    common::run_ticks(&mut app, 1);
    assert!(markers(&app).is_empty());
}

#[test]
fn one_tick_decay_window_still_lights_until_burn_out() {
    let config = FlareConfig {
        light_decay_time: 10,
        entity_decay_time: 5,
        no_source_decay_time: 1,
        ..default()
    };
    let mut app = common::app_headless_with(config);
    let floor_cell = IVec3::new(0, FLOOR_Y + 1, 0);

    drop_flare(&mut app);
    let mut lit_ticks = 0;
    let mut reached_burn_out = false;
    for _ in 0..20 {
        common::run_ticks(&mut app, 1);
        let Some(flare) = app
            .world_mut()
            .query::<&Flare>()
            .iter(app.world())
            .next()
            .cloned()
        else {
            continue;
        };

        if (1..10).contains(&flare.age) {
            assert_eq!(markers(&app), vec![(floor_cell, true)], "age {}", flare.age);
            lit_ticks += 1;
        } else if flare.age >= 10 {
            reached_burn_out = true;
            assert!(!flare.spawns_lights);
            assert!(markers(&app).iter().all(|(_, lit)| !lit), "age {}", flare.age);
        }
    }

    assert_eq!(lit_ticks, 9);
    assert!(reached_burn_out);
}

#[test]
fn replicas_do_not_simulate_flares() {
    let mut app = common::app_headless_with(short_lived());
    app.insert_resource(Authority::Replica);

    let e = app
        .world_mut()
        .spawn((
            Flare::default(),
            bevy_flares::plugins::physics::KinematicBody::new(Vec3::ZERO, 0.03, 0.99),
            Transform::from_xyz(0.5, 6.5, 0.5),
        ))
        .id();
    common::run_ticks(&mut app, 20);

    let flare = app.world().get::<Flare>(e).unwrap();
    assert_eq!(flare.age, 0);
    assert!(markers(&app).is_empty());
}
