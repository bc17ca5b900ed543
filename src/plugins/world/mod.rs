//! World plugin: the voxel grid, its terrain and the light-marker block.

use bevy::prelude::*;

use crate::common::state::{is_authoritative, GameState, TickSet};

pub mod direction;
pub mod grid;
pub mod light_marker;
pub mod raycast;
pub mod render;

pub use direction::{cell_center, cell_of, Direction};
pub use grid::{Block, VoxelGrid};
pub use light_marker::LightMarker;
pub use raycast::BlockHit;

/// Half extent of the square floor, in cells.
const HALF_EXTENT: i32 = 24;
/// Floor blocks occupy `y == FLOOR_Y`; everything stands on `FLOOR_Y + 1`.
pub const FLOOR_Y: i32 = 1;

pub fn plugin(app: &mut App) {
    app.init_resource::<VoxelGrid>()
        .add_systems(OnEnter(GameState::InGame), build_terrain)
        .add_systems(
            FixedUpdate,
            light_marker::decay_light_markers
                .in_set(TickSet::Blocks)
                .run_if(is_authoritative),
        );
}

/// Floor, a perimeter wall and a low cave to throw flares into.
fn build_terrain(mut grid: ResMut<VoxelGrid>) {
    let h = HALF_EXTENT;

    grid.fill_solid(IVec3::new(-h, FLOOR_Y, -h), IVec3::new(h, FLOOR_Y, h));

    let wall_top = FLOOR_Y + 4;
    grid.fill_solid(IVec3::new(-h, FLOOR_Y, -h), IVec3::new(h, wall_top, -h));
    grid.fill_solid(IVec3::new(-h, FLOOR_Y, h), IVec3::new(h, wall_top, h));
    grid.fill_solid(IVec3::new(-h, FLOOR_Y, -h), IVec3::new(-h, wall_top, h));
    grid.fill_solid(IVec3::new(h, FLOOR_Y, -h), IVec3::new(h, wall_top, h));

    // Cave: two walls and a roof, open on both ends along x.
    grid.fill_solid(IVec3::new(6, FLOOR_Y + 1, 6), IVec3::new(14, FLOOR_Y + 3, 6));
    grid.fill_solid(IVec3::new(6, FLOOR_Y + 1, 10), IVec3::new(14, FLOOR_Y + 3, 10));
    grid.fill_solid(IVec3::new(6, FLOOR_Y + 4, 6), IVec3::new(14, FLOOR_Y + 4, 10));

    info!("Terrain built: {} solid cells", grid.solid_cells().count());
}
