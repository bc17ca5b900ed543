//! Tunable gameplay constants that are not part of the operator config.

use bevy::prelude::*;

/// Units are grid cells and ticks unless noted.
#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Launch speed of a thrown flare, cells per tick.
    pub throw_speed: f32,
    /// Upward bias added to the aim direction before normalizing.
    pub throw_lift: f32,
    /// Per-tick velocity multiplier applied to airborne flares.
    pub air_drag: f32,
    pub flare_radius: f32,
    /// Player walk speed, cells per second (avian integrates this).
    pub player_speed: f32,
    /// Fixed simulation rate.
    pub ticks_per_second: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            throw_speed: 1.5,
            throw_lift: 0.25,
            air_drag: 0.99,
            flare_radius: 0.125,
            player_speed: 4.3,
            ticks_per_second: 20.0,
        }
    }
}
