//! Spawn consumer: turn throw requests into flares.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{config::FlareConfig, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::physics::KinematicBody;

use super::components::Flare;
use super::messages::{FlareThrown, ThrowFlareRequest};
use super::pouch::FlarePouch;

/// Everything a live flare entity carries.
///
/// Avian sees a kinematic sensor that only reports overlaps with living
/// targets; motion is driven by [`KinematicBody`].
pub fn flare_bundle(flare: Flare, position: Vec3, body: KinematicBody, tunables: &Tunables) -> impl Bundle {
    (
        Name::new("Flare"),
        flare,
        body,
        Transform::from_translation(position),
        RigidBody::Kinematic,
        Collider::sphere(tunables.flare_radius),
        Sensor,
        CollisionLayers::new(Layer::Flare, [Layer::Living]),
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    )
}

pub fn spawn_thrown_flares(
    mut commands: Commands,
    config: Res<FlareConfig>,
    tunables: Res<Tunables>,
    mut requests: MessageReader<ThrowFlareRequest>,
    mut q_pouch: Query<&mut FlarePouch>,
    mut thrown: MessageWriter<FlareThrown>,
) {
    for req in requests.read() {
        let Ok(mut pouch) = q_pouch.get_mut(req.thrower) else {
            debug!("Thrower {} has no flare pouch", req.thrower);
            continue;
        };
        if !pouch.take_one() {
            debug!("Thrower {} is out of flares", req.thrower);
            continue;
        }

        let body = KinematicBody::new(req.velocity, config.flare_gravity, tunables.air_drag);
        let flare = commands
            .spawn(flare_bundle(Flare::default(), req.origin, body, &tunables))
            .id();

        thrown.write(FlareThrown {
            flare,
            thrower: req.thrower,
            make_noise: config.make_noise_when_thrown,
        });
    }
}
