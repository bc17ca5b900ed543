//! Light placement: keeps one light marker near each live flare.
//!
//! Every tick a flare either refreshes the marker it tracks, moves to a new
//! cell, or places a fresh one. A marker the flare walks away from is not
//! removed; it runs down its own countdown (see
//! [`decay_light_markers`](crate::plugins::world::light_marker::decay_light_markers)).

use bevy::prelude::*;

use crate::common::config::FlareConfig;
use crate::plugins::world::{Block, Direction, LightMarker, VoxelGrid};

use super::components::Flare;

/// A tracked marker is kept while it stays strictly closer than this.
pub const REFRESH_RADIUS: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightUpdate {
    Created(IVec3),
    Refreshed(IVec3),
    /// The flare reached `lightDecayTime`; the marker at this cell is now unlit.
    Extinguished(IVec3),
    /// `lightDecayTime` reached with no marker left to put out.
    Expired,
    /// Nowhere to place a marker this tick. Retried next tick.
    NoSpace,
}

#[inline]
fn within_reach(marker: IVec3, cell: IVec3) -> bool {
    (marker - cell).as_vec3().length_squared() < REFRESH_RADIUS * REFRESH_RADIUS
}

/// Closest cell around `origin` that can hold a marker.
///
/// Search order: `origin` itself, then its six neighbours in
/// [`Direction::ALL`] order, then all 36 two-step offsets (first step outer,
/// second step inner, both in [`Direction::ALL`] order).
pub fn find_light_or_space(grid: &VoxelGrid, origin: IVec3) -> Option<IVec3> {
    if grid.accepts_light(origin) {
        return Some(origin);
    }

    let one_step = Direction::ALL.iter().map(|d| origin + d.offset());
    let two_step = Direction::ALL.iter().flat_map(|first| {
        Direction::ALL
            .iter()
            .map(move |second| origin + first.offset() + second.offset())
    });

    one_step.chain(two_step).find(|cell| grid.accepts_light(*cell))
}

/// Run one tick of light bookkeeping for `flare`, currently in `cell`.
pub fn maintain_light(
    flare: &mut Flare,
    grid: &mut VoxelGrid,
    config: &FlareConfig,
    cell: IVec3,
) -> LightUpdate {
    let target = match flare.light {
        Some(tracked) if grid.light_marker(tracked).is_some() && within_reach(tracked, cell) => {
            Some(tracked)
        }
        _ => find_light_or_space(grid, cell),
    };

    let Some(target) = target else {
        return LightUpdate::NoSpace;
    };

    let burnt_out = flare.age >= config.light_decay_time;

    match grid.light_marker_mut(target) {
        Some(marker) if burnt_out => {
            marker.extinguish();
            flare.light = Some(target);
            flare.spawns_lights = false;
            debug!("Flare light at {target} went out at age {}", flare.age);
            LightUpdate::Extinguished(target)
        }
        Some(marker) => {
            marker.refresh(config.no_source_decay_time);
            flare.light = Some(target);
            LightUpdate::Refreshed(target)
        }
        // Past light decay a flare never places a marker, even with no
        // marker left to put out; it only stops spawning.
        None if burnt_out => {
            flare.spawns_lights = false;
            LightUpdate::Expired
        }
        None => {
            grid.set(target, Block::Light(LightMarker::placed(config)));
            flare.light = Some(target);
            debug!("Flare placed light marker at {target}");
            LightUpdate::Created(target)
        }
    }
}
