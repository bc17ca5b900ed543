//! Segment traversal through the voxel grid (Amanatides & Woo).

use bevy::prelude::*;

use super::direction::{cell_of, Direction};
use super::grid::VoxelGrid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHit {
    pub cell: IVec3,
    /// Face of `cell` that the segment entered through.
    pub face: Direction,
    /// Segment parameter in `0..=1` at the entry point.
    pub t: f32,
}

impl VoxelGrid {
    /// First solid cell crossed by the segment `from -> to`.
    ///
    /// The cell containing `from` is never reported, so a body that already
    /// overlaps a block can still move out of it.
    pub fn raycast(&self, from: Vec3, to: Vec3) -> Option<BlockHit> {
        let delta = to - from;
        if delta == Vec3::ZERO {
            return None;
        }

        let mut cell = cell_of(from);
        let mut step = IVec3::ZERO;
        let mut t_max = Vec3::splat(f32::INFINITY);
        let mut t_delta = Vec3::splat(f32::INFINITY);

        for axis in 0..3 {
            let d = delta[axis];
            if d > 0.0 {
                step[axis] = 1;
                t_max[axis] = ((cell[axis] + 1) as f32 - from[axis]) / d;
                t_delta[axis] = 1.0 / d;
            } else if d < 0.0 {
                step[axis] = -1;
                t_max[axis] = (cell[axis] as f32 - from[axis]) / d;
                t_delta[axis] = -1.0 / d;
            }
        }

        loop {
            let axis = if t_max.x <= t_max.y && t_max.x <= t_max.z {
                0
            } else if t_max.y <= t_max.z {
                1
            } else {
                2
            };

            let t = t_max[axis];
            if t > 1.0 {
                return None;
            }

            cell[axis] += step[axis];
            if self.is_solid(cell) {
                return Some(BlockHit {
                    cell,
                    // Moving +x enters through the block's west face, and so on.
                    face: Direction::from_axis_step(axis, -step[axis]),
                    t,
                });
            }
            t_max[axis] += t_delta[axis];
        }
    }
}
