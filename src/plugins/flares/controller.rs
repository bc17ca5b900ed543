//! Per-tick flare update: fall-out check, motion with bounce, lifetime, light.

use bevy::prelude::*;

use crate::common::config::FlareConfig;
use crate::plugins::physics::KinematicBody;
use crate::plugins::world::{cell_of, Direction, VoxelGrid};

use super::components::Flare;
use super::light;

/// A block hit with `velocity.y` above this stops the flare dead.
pub const RESTING_VY: f32 = -0.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlareFate {
    Alive,
    FellOutOfWorld,
    Expired,
}

/// Velocity after striking `face` of a solid block.
///
/// A slow downward hit counts as landing and zeroes everything. Otherwise
/// the component across the face flips and all three are divided by
/// `bounce_modifier`. A modifier of zero leaves speeds undamped.
pub fn bounce(velocity: Vec3, face: Direction, bounce_modifier: f32) -> Vec3 {
    if velocity.y > RESTING_VY {
        return Vec3::ZERO;
    }

    let divisor = if bounce_modifier > 0.0 { bounce_modifier } else { 1.0 };
    let mut rebound = velocity / divisor;
    let axis = face.axis();
    rebound[axis] = -rebound[axis];
    rebound
}

/// One tick of a single flare. The caller despawns it unless `Alive`.
pub fn advance_flare(
    flare: &mut Flare,
    body: &mut KinematicBody,
    position: &mut Vec3,
    grid: &mut VoxelGrid,
    config: &FlareConfig,
) -> FlareFate {
    if position.y <= 0.0 {
        return FlareFate::FellOutOfWorld;
    }

    flare.age = flare.age.saturating_add(1);
    body.gravity = config.flare_gravity;
    body.step(position, grid, |velocity, hit| {
        *velocity = bounce(*velocity, hit.face, config.bounce_modifier);
    });

    if u64::from(flare.age) > config.flare_lifetime() {
        return FlareFate::Expired;
    }

    if flare.spawns_lights {
        light::maintain_light(flare, grid, config, cell_of(*position));
    }

    FlareFate::Alive
}

pub fn tick_flares(
    mut commands: Commands,
    config: Res<FlareConfig>,
    mut grid: ResMut<VoxelGrid>,
    mut q: Query<(Entity, &mut Flare, &mut KinematicBody, &mut Transform)>,
) {
    for (e, mut flare, mut body, mut tf) in &mut q {
        let fate = advance_flare(&mut flare, &mut body, &mut tf.translation, &mut grid, &config);
        if fate != FlareFate::Alive {
            debug!("Despawning flare {e}: {fate:?} at age {}", flare.age);
            commands.entity(e).despawn();
        }
    }
}
