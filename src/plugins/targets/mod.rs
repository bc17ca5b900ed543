//! Targets plugin: living dummies a flare can hit.
//!
//! Gameplay only needs `Living` + a collider on [`Layer::Living`]. The
//! render half gives them a body and lights them up once they are
//! `Glowing`.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::flares::{Glowing, Living};
use crate::plugins::world::FLOOR_Y;

#[derive(Component)]
pub struct Target;

const TARGET_SPOTS: [Vec3; 3] = [
    Vec3::new(8.5, 0.0, -6.5),
    Vec3::new(-10.5, 0.0, 3.5),
    Vec3::new(10.5, 0.0, 8.5),
];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets);
}

pub fn render_plugin(app: &mut App) {
    app.add_systems(Update, (dress_targets, show_glow));
}

fn spawn_targets(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Living, [Layer::Flare, Layer::Player]);
    let stand_y = FLOOR_Y as f32 + 1.0 + 0.9;

    for (i, spot) in TARGET_SPOTS.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Target{i}")),
            Target,
            Living,
            Transform::from_translation(spot.with_y(stand_y)),
            RigidBody::Static,
            Collider::capsule(0.35, 1.1),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn dress_targets(
    mut commands: Commands,
    q_new: Query<Entity, Added<Target>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for e in &q_new {
        commands.entity(e).insert((
            Mesh3d(meshes.add(Capsule3d::new(0.35, 1.1))),
            MeshMaterial3d(materials.add(Color::srgb(0.75, 0.3, 0.25))),
        ));
    }
}

fn show_glow(
    q_glowing: Query<&MeshMaterial3d<StandardMaterial>, Added<Glowing>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for handle in &q_glowing {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.emissive = LinearRgba::rgb(4.0, 3.2, 1.2);
        }
    }
}
