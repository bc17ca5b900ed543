//! The light-marker block and its no-source decay.
//!
//! A marker is an invisible grid-resident block that emits light while lit.
//! It does not know which flare placed it: flares push its `next_check_in`
//! back every tick they stay close. Once nothing refreshes it, the countdown
//! runs out and the marker removes itself.

use bevy::prelude::*;

use crate::common::config::FlareConfig;

use super::grid::VoxelGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightMarker {
    pub lit: bool,
    /// Ticks until the marker removes itself unless refreshed.
    pub next_check_in: u32,
}

impl LightMarker {
    /// Default state of a freshly placed marker.
    pub fn placed(config: &FlareConfig) -> Self {
        Self {
            lit: true,
            next_check_in: config.no_source_decay_time,
        }
    }

    /// Push the countdown back and light the marker. A cell shared with a
    /// flare that already burnt out comes back on for the younger one.
    #[inline]
    pub fn refresh(&mut self, ticks: u32) {
        self.next_check_in = ticks;
        self.lit = true;
    }

    #[inline]
    pub fn extinguish(&mut self) {
        self.lit = false;
    }
}

/// Count every marker down by one tick; remove those that hit zero.
pub fn decay_light_markers(mut grid: ResMut<VoxelGrid>) {
    let expired = grid.tick_markers();
    if !expired.is_empty() {
        debug!("{} light marker(s) decayed", expired.len());
    }
}
