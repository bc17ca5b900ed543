//! World visuals (render-only): one cube mesh per solid cell.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

use super::direction::cell_center;
use super::grid::VoxelGrid;

#[derive(Component)]
pub struct TerrainMesh;

pub fn plugin(app: &mut App) {
    // Runs after `build_terrain` filled the grid on the same transition.
    app.add_systems(OnEnter(GameState::InGame), spawn_terrain_meshes.after(super::build_terrain));
}

fn spawn_terrain_meshes(
    mut commands: Commands,
    grid: Res<VoxelGrid>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube = meshes.add(Cuboid::from_length(1.0));
    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.27, 0.33),
        perceptual_roughness: 0.9,
        ..default()
    });

    for cell in grid.solid_cells() {
        commands.spawn((
            TerrainMesh,
            Mesh3d(cube.clone()),
            MeshMaterial3d(stone.clone()),
            Transform::from_translation(cell_center(cell)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
