//! Flare save records.
//!
//! A flare round-trips through JSON together with the marker cell it was
//! tracking. "No marker" is an explicit `null`, never a zero coordinate.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{config::FlareConfig, error::PersistError, tunables::Tunables};
use crate::plugins::physics::KinematicBody;

use super::components::Flare;
use super::spawn::flare_bundle;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlareRecord {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub age: u32,
    pub spawns_lights: bool,
    pub light: Option<[i32; 3]>,
}

impl FlareRecord {
    pub fn capture(flare: &Flare, body: &KinematicBody, transform: &Transform) -> Self {
        Self {
            position: transform.translation.to_array(),
            velocity: body.velocity.to_array(),
            age: flare.age,
            spawns_lights: flare.spawns_lights,
            light: flare.light.map(|cell| cell.to_array()),
        }
    }

    pub fn flare(&self) -> Flare {
        Flare {
            age: self.age,
            light: self.light.map(IVec3::from_array),
            spawns_lights: self.spawns_lights,
        }
    }

    pub fn restore(&self, config: &FlareConfig, tunables: &Tunables) -> impl Bundle {
        let body = KinematicBody::new(
            Vec3::from_array(self.velocity),
            config.flare_gravity,
            tunables.air_drag,
        );
        flare_bundle(self.flare(), Vec3::from_array(self.position), body, tunables)
    }
}

pub fn encode(records: &[FlareRecord]) -> Result<String, PersistError> {
    serde_json::to_string(records).map_err(PersistError::Encode)
}

pub fn decode(data: &str) -> Result<Vec<FlareRecord>, PersistError> {
    serde_json::from_str(data).map_err(PersistError::Decode)
}

/// Capture every flare in `world`.
pub fn save_flares(world: &mut World) -> Result<String, PersistError> {
    let mut q = world.query::<(&Flare, &KinematicBody, &Transform)>();
    let records: Vec<FlareRecord> = q
        .iter(world)
        .map(|(flare, body, tf)| FlareRecord::capture(flare, body, tf))
        .collect();
    encode(&records)
}

/// Spawn the flares saved by [`save_flares`]. Returns the new entities.
pub fn load_flares(world: &mut World, data: &str) -> Result<Vec<Entity>, PersistError> {
    let records = decode(data)?;
    let config = world.get_resource::<FlareConfig>().cloned().unwrap_or_default();
    let tunables = world.get_resource::<Tunables>().cloned().unwrap_or_default();

    let spawned = records
        .iter()
        .map(|record| world.spawn(record.restore(&config, &tunables)).id())
        .collect::<Vec<_>>();
    info!("Restored {} flare(s)", spawned.len());
    Ok(spawned)
}
