//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - FixedUpdate: apply velocity to the kinematic rigid body and face the walk direction
//!
//! The player carries the [`FlarePouch`] that throw requests draw from.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{config::FlareConfig, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::flares::FlarePouch;
use crate::plugins::world::FLOOR_Y;

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    /// Walk direction on the ground plane (x, z).
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands, config: Res<FlareConfig>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Living]);

    commands.spawn((
        Name::new("Player"),
        Player,
        FlarePouch::full(&config),
        Transform::from_xyz(0.5, FLOOR_Y as f32 + 1.0, 0.5),
        RigidBody::Kinematic,
        Collider::capsule(0.3, 1.2),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut Transform), With<Player>>,
) {
    let Ok((mut vel, mut tf)) = q_player.single_mut() else {
        return;
    };

    let walk = Vec3::new(input.move_axis.x, 0.0, input.move_axis.y);
    vel.0 = walk * tunables.player_speed;

    // Keep facing the last direction walked; throws go that way.
    if walk != Vec3::ZERO {
        let eye = tf.translation;
        tf.look_to(walk, Vec3::Y);
        tf.translation = eye;
    }
}
