//! Per-player flare supply.

use bevy::prelude::*;

use crate::common::config::FlareConfig;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FlarePouch {
    pub count: u32,
    pub capacity: u32,
    /// Countdown to the next refill. Held at full while the pouch is full.
    pub ticks_until_replenish: u32,
}

impl FlarePouch {
    pub fn full(config: &FlareConfig) -> Self {
        Self {
            count: config.flare_quantity,
            capacity: config.flare_quantity,
            ticks_until_replenish: config.flare_replenish_time,
        }
    }

    /// Remove one flare. `false` if the pouch was empty.
    pub fn take_one(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Advance the refill countdown one tick. Returns how many flares were added.
    pub fn tick(&mut self, replenish_time: u32, replenish_quantity: u32) -> u32 {
        if self.count >= self.capacity {
            self.ticks_until_replenish = replenish_time;
            return 0;
        }

        self.ticks_until_replenish = self.ticks_until_replenish.saturating_sub(1);
        if self.ticks_until_replenish > 0 {
            return 0;
        }

        self.ticks_until_replenish = replenish_time;
        let before = self.count;
        self.count = self.count.saturating_add(replenish_quantity).min(self.capacity);
        self.count - before
    }
}

pub fn replenish_pouches(config: Res<FlareConfig>, mut q: Query<&mut FlarePouch>) {
    for mut pouch in &mut q {
        let added = pouch.tick(config.flare_replenish_time, config.flare_replenish_quantity);
        if added > 0 {
            debug!("Pouch replenished: +{added} ({}/{})", pouch.count, pouch.capacity);
        }
    }
}
