//! Sparse voxel grid.
//!
//! Cells not present in the map are air. The grid is the single writer of
//! block state; flares and markers only ever go through its methods.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::light_marker::LightMarker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Solid,
    Light(LightMarker),
}

#[derive(Resource, Debug, Default, Clone)]
pub struct VoxelGrid {
    cells: HashMap<IVec3, Block>,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, cell: IVec3) -> Option<&Block> {
        self.cells.get(&cell)
    }

    #[inline]
    pub fn set(&mut self, cell: IVec3, block: Block) {
        self.cells.insert(cell, block);
    }

    #[inline]
    pub fn clear(&mut self, cell: IVec3) -> Option<Block> {
        self.cells.remove(&cell)
    }

    #[inline]
    pub fn is_air(&self, cell: IVec3) -> bool {
        !self.cells.contains_key(&cell)
    }

    #[inline]
    pub fn is_solid(&self, cell: IVec3) -> bool {
        matches!(self.cells.get(&cell), Some(Block::Solid))
    }

    /// Air or an existing light marker: somewhere a marker may live.
    #[inline]
    pub fn accepts_light(&self, cell: IVec3) -> bool {
        !self.is_solid(cell)
    }

    pub fn light_marker(&self, cell: IVec3) -> Option<&LightMarker> {
        match self.cells.get(&cell) {
            Some(Block::Light(marker)) => Some(marker),
            _ => None,
        }
    }

    pub fn light_marker_mut(&mut self, cell: IVec3) -> Option<&mut LightMarker> {
        match self.cells.get_mut(&cell) {
            Some(Block::Light(marker)) => Some(marker),
            _ => None,
        }
    }

    pub fn light_markers(&self) -> impl Iterator<Item = (IVec3, &LightMarker)> {
        self.cells.iter().filter_map(|(cell, block)| match block {
            Block::Light(marker) => Some((*cell, marker)),
            Block::Solid => None,
        })
    }

    pub fn solid_cells(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.cells
            .iter()
            .filter(|(_, block)| matches!(block, Block::Solid))
            .map(|(cell, _)| *cell)
    }

    /// Fill the inclusive box `min..=max` with solid blocks.
    pub fn fill_solid(&mut self, min: IVec3, max: IVec3) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.cells.insert(IVec3::new(x, y, z), Block::Solid);
                }
            }
        }
    }

    /// Advance every marker's countdown by one tick and remove the expired ones.
    /// Returns the cells that were cleared.
    ///
    /// A marker is checked before it is counted down: one refreshed to `n` on
    /// tick `t` is removed on tick `t + n` unless refreshed again first. With
    /// `n == 1` a flare refreshing every tick keeps its marker alive.
    pub(crate) fn tick_markers(&mut self) -> Vec<IVec3> {
        let mut expired = Vec::new();
        for (cell, block) in self.cells.iter_mut() {
            if let Block::Light(marker) = block {
                if marker.next_check_in == 0 {
                    expired.push(*cell);
                } else {
                    marker.next_check_in -= 1;
                }
            }
        }
        for cell in &expired {
            self.cells.remove(cell);
        }
        expired
    }
}
