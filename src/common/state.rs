//! Global state machine, simulation authority and per-tick ordering.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

/// Who owns the simulation in this app.
///
/// A `Replica` only mirrors what a server sends it, so every system that
/// mutates flares, markers or hit targets is gated on [`is_authoritative`].
#[derive(Resource, Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Authority {
    #[default]
    Server,
    Replica,
}

pub fn is_authoritative(authority: Res<Authority>) -> bool {
    *authority == Authority::Server
}

/// Ordering inside one `FixedUpdate` tick.
///
/// ```text
/// Pouch  -> replenish flare pouches
/// Throw  -> consume throw requests, spawn flares
/// Flares -> move flares, maintain their light markers
/// Blocks -> light markers run their no-source decay
/// ```
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TickSet {
    Pouch,
    Throw,
    Flares,
    Blocks,
}
