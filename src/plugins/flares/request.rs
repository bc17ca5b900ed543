use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::messages::ThrowFlareRequest;

/// Height above the player's origin that flares leave from.
const HAND_HEIGHT: f32 = 0.6;

/// Launch point and velocity for a flare thrown from `thrower`.
pub fn throw_from(thrower: &Transform, tunables: &Tunables) -> (Vec3, Vec3) {
    let aim = (thrower.forward().as_vec3() + Vec3::Y * tunables.throw_lift).normalize_or(Vec3::Y);
    let origin = thrower.translation + Vec3::Y * HAND_HEIGHT + aim * 0.5;
    (origin, aim * tunables.throw_speed)
}

/// Producer: right mouse button or `F` throws a flare where the player faces.
///
/// This system does not touch the pouch; the spawn consumer decides.
pub fn request_throw(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    q_player: Query<(Entity, &Transform), With<Player>>,
    tunables: Res<Tunables>,
    mut writer: MessageWriter<ThrowFlareRequest>,
) {
    let clicked = buttons.is_some_and(|b| b.just_pressed(MouseButton::Right));
    let pressed = keys.is_some_and(|k| k.just_pressed(KeyCode::KeyF));
    if !(clicked || pressed) {
        return;
    }

    let (thrower, tf) = match q_player.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single Player Transform: {e:?}"); return; }
    };

    let (origin, velocity) = throw_from(tf, &tunables);
    writer.write(ThrowFlareRequest { thrower, origin, velocity });
}
