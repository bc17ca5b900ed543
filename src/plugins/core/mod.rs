//! Core plugin: shared resources, tick rate and per-tick ordering.
//!
//! A `FlareConfig` already inserted by the caller (for example one loaded
//! from disk) is kept; otherwise defaults are used.

use bevy::prelude::*;

use crate::common::config::FlareConfig;
use crate::common::state::{Authority, TickSet};
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<FlareConfig>()
        .init_resource::<Tunables>()
        .init_resource::<Authority>();

    let hz = app.world().resource::<Tunables>().ticks_per_second;
    app.insert_resource(Time::<Fixed>::from_hz(hz));
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.03)));

    app.configure_sets(
        FixedUpdate,
        (TickSet::Pouch, TickSet::Throw, TickSet::Flares, TickSet::Blocks).chain(),
    );
}

#[cfg(test)]
mod tests;
