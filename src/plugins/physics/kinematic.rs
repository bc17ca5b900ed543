//! Grid-stepped kinematic motion.
//!
//! One step, in order:
//! 1. trace the segment `position -> position + velocity` through the grid,
//! 2. on a solid hit, hand the velocity to the owner's collision callback,
//! 3. move by the (possibly rewritten) velocity,
//! 4. apply drag, then gravity.
//!
//! Velocity is in cells per tick. Nothing here knows what a flare is.

use bevy::prelude::*;

use crate::plugins::world::{BlockHit, VoxelGrid};

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub velocity: Vec3,
    /// Subtracted from `velocity.y` every step.
    pub gravity: f32,
    /// Multiplies `velocity` every step.
    pub drag: f32,
}

impl KinematicBody {
    pub fn new(velocity: Vec3, gravity: f32, drag: f32) -> Self {
        Self { velocity, gravity, drag }
    }

    /// Advance `position` by one tick. Returns the block struck, if any.
    pub fn step(
        &mut self,
        position: &mut Vec3,
        grid: &VoxelGrid,
        mut on_block: impl FnMut(&mut Vec3, &BlockHit),
    ) -> Option<BlockHit> {
        let hit = grid.raycast(*position, *position + self.velocity);
        if let Some(hit) = &hit {
            on_block(&mut self.velocity, hit);
        }

        *position += self.velocity;
        self.velocity *= self.drag;
        self.velocity.y -= self.gravity;
        hit
    }
}
