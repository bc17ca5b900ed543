use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::config::FlareConfig;

use super::components::{Flare, Glowing, Living};
use super::messages::{FlareBroadcast, FlareEvent};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Flare struck a living target: highlight it, tell observers, break the flare.
pub fn process_flare_hits(
    mut commands: Commands,
    config: Res<FlareConfig>,
    mut started: MessageReader<CollisionStart>,
    q_flares: Query<&Transform, With<Flare>>,
    q_living: Query<(), With<Living>>,
    mut broadcast: MessageWriter<FlareBroadcast>,
    // A flare breaks once, however many targets it touched this tick.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let f1 = q_flares.contains(t1.collider);
        let f2 = q_flares.contains(t2.collider);
        if !(f1 ^ f2) {
            continue;
        }
        let (flare_side, other_side) = if f1 { (t1, t2) } else { (t2, t1) };

        let target = other_side.gameplay_owner();
        if !q_living.contains(target) {
            continue;
        }

        if !seen.insert(flare_side.collider) {
            continue;
        }

        let Ok(tf) = q_flares.get(flare_side.collider) else {
            continue;
        };

        if config.hit_entity_glows {
            commands.entity(target).try_insert(Glowing);
        }

        broadcast.write(FlareBroadcast {
            flare: flare_side.collider,
            at: tf.translation,
            event: FlareEvent::Shattered,
        });

        debug!("Flare {} shattered on {target}", flare_side.collider);
        commands.entity(flare_side.collider).despawn();
    }
}
