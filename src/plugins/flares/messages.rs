//! Flare messages.
//!
//! Throwing is a producer → queue → consumer pipeline like everything else:
//! input writes intent, the spawn consumer owns pouch bookkeeping.
//! [`FlareBroadcast`] is the outward signal observers (particles, sounds,
//! network replication) subscribe to.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct ThrowFlareRequest {
    pub thrower: Entity,
    pub origin: Vec3,
    /// Cells per tick.
    pub velocity: Vec3,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct FlareThrown {
    pub flare: Entity,
    pub thrower: Entity,
    /// Whether observers should play the throw sound.
    pub make_noise: bool,
}

/// Fixed event codes carried by [`FlareBroadcast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlareEvent {
    /// The flare broke on a living target.
    Shattered,
}

impl FlareEvent {
    /// Wire code sent to replicas.
    pub const fn code(self) -> u8 {
        match self {
            FlareEvent::Shattered => 3,
        }
    }
}

#[derive(Message, Clone, Copy, Debug)]
pub struct FlareBroadcast {
    pub flare: Entity,
    pub at: Vec3,
    pub event: FlareEvent,
}
