//! The six axis-aligned grid directions.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Fixed enumeration order. Placement searches depend on it.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    #[inline]
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Down => IVec3::NEG_Y,
            Direction::Up => IVec3::Y,
            Direction::North => IVec3::NEG_Z,
            Direction::South => IVec3::Z,
            Direction::West => IVec3::NEG_X,
            Direction::East => IVec3::X,
        }
    }

    /// Index of the axis this direction runs along (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Direction::West | Direction::East => 0,
            Direction::Down | Direction::Up => 1,
            Direction::North | Direction::South => 2,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Direction pointing along `axis` with the sign of `step`.
    pub(crate) fn from_axis_step(axis: usize, step: i32) -> Direction {
        match (axis, step > 0) {
            (0, false) => Direction::West,
            (0, true) => Direction::East,
            (1, false) => Direction::Down,
            (1, true) => Direction::Up,
            (_, false) => Direction::North,
            (_, true) => Direction::South,
        }
    }
}

/// Grid cell containing a world-space point.
#[inline]
pub fn cell_of(point: Vec3) -> IVec3 {
    point.floor().as_ivec3()
}

/// World-space center of a grid cell.
#[inline]
pub fn cell_center(cell: IVec3) -> Vec3 {
    cell.as_vec3() + Vec3::splat(0.5)
}
