//! Physics: avian3d for overlap events, plus the grid-stepped kinematic body
//! that thrown objects use.
//!
//! Avian never integrates flares. They are sensors whose `Transform` is
//! written by [`KinematicBody::step`]; avian only reports when they start
//! touching something on a layer they care about.

use avian3d::prelude::*;
use bevy::prelude::*;

pub mod kinematic;

pub use kinematic::KinematicBody;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    // Kinematic bodies carry their own gravity.
    app.insert_resource(Gravity(Vec3::ZERO));
}
