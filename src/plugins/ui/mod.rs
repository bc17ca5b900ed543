//! HUD (render-only): flares left in the player's pouch.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::config::FlareConfig;
use crate::common::state::GameState;
use crate::plugins::flares::FlarePouch;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct FlareCountText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            update_flare_count.run_if(in_state(GameState::InGame)),
        );
}

pub fn flare_count_label(pouch: &FlarePouch) -> String {
    format!("Flares: {}/{}", pouch.count, pouch.capacity)
}

fn spawn_hud(mut commands: Commands, config: Res<FlareConfig>) {
    if !config.display_flare_count {
        return;
    }

    commands.spawn((
        Name::new("FlareCount"),
        FlareCountText,
        Text::new(""),
        TextFont { font_size: 22.0, ..default() },
        TextColor(Color::srgb(1.0, 0.8, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(12.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_flare_count(
    q_pouch: Query<&FlarePouch, (With<Player>, Changed<FlarePouch>)>,
    mut q_text: Query<&mut Text, With<FlareCountText>>,
) {
    let Ok(pouch) = q_pouch.single() else { return; };
    let Ok(mut text) = q_text.single_mut() else { return; };
    text.0 = flare_count_label(pouch);
}
