//! Flares plugin: thrown light sources.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  request_throw        input -> ThrowFlareRequest                     │
//!└──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate (one tick)
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  Pouch:  replenish_pouches                                            │
//!│  Throw:  spawn_thrown_flares  ThrowFlareRequest -> Flare + FlareThrown│
//!│  Flares: tick_flares                                                  │
//!│          - y <= 0                    -> despawn                       │
//!│          - KinematicBody step, bounce on blocks                       │
//!│          - age > entity + light time -> despawn                       │
//!│          - maintain_light            -> VoxelGrid markers             │
//!│  Blocks: decay_light_markers (world plugin)                           │
//!└──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  avian CollisionStart -> process_flare_hits                           │
//!│          Glowing on target, FlareBroadcast, despawn flare             │
//!└──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything past input runs only on the authoritative side.

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::{is_authoritative, GameState, TickSet};

pub mod collision;
pub mod components;
pub mod controller;
pub mod light;
pub mod messages;
pub mod persist;
pub mod pouch;
pub mod request;
pub mod spawn;

pub use components::{Flare, Glowing, Living};
pub use pouch::FlarePouch;

pub struct FlaresPlugin;

impl Plugin for FlaresPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::ThrowFlareRequest>()
            .add_message::<messages::FlareThrown>()
            .add_message::<messages::FlareBroadcast>();

        app.add_systems(
            Update,
            request::request_throw.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (
                pouch::replenish_pouches.in_set(TickSet::Pouch),
                spawn::spawn_thrown_flares.in_set(TickSet::Throw),
                controller::tick_flares.in_set(TickSet::Flares),
            )
                .run_if(in_state(GameState::InGame))
                .run_if(is_authoritative),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_flare_hits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame))
                .run_if(is_authoritative),
        );
    }
}
