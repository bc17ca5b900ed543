use bevy::prelude::*;

/// A thrown flare.
///
/// Position lives in `Transform`, velocity in [`KinematicBody`]. The flare
/// tracks at most one light marker at a time.
///
/// [`KinematicBody`]: crate::plugins::physics::KinematicBody
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Flare {
    /// Ticks since the flare was thrown.
    pub age: u32,
    /// Cell of the marker this flare is keeping alive, if any.
    pub light: Option<IVec3>,
    /// Cleared for good once the flare's light has gone out.
    pub spawns_lights: bool,
}

impl Default for Flare {
    fn default() -> Self {
        Self { age: 0, light: None, spawns_lights: true }
    }
}

/// Something a flare can hit.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Living;

/// Highlight applied to a living target struck by a flare. Never removed here.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glowing;
