//! Height-indexed voxel store for the open world.
//!
//! One `u32` per (x, z) column counting the stacked unit blocks there,
//! including any tree contribution. The map models cumulative stack height,
//! not a voxel set, so there is no removal operation.

use voxelgrove_core::{ColumnHeightSource, WorldExtent, WorldQueryError};

/// Column-height map over a fixed square extent.
///
/// Created once per world-generation session: the terrain generator raises
/// columns first, the tree placer raises them further, and motion controllers
/// read heights every tick. Heights never decrease.
pub struct VoxelMap {
    extent: WorldExtent,
    /// Height values, x-major. Indexed via `index()`.
    heights: Vec<u32>,
}

impl VoxelMap {
    /// Allocate every column of `extent` at height 0.
    pub fn new(extent: WorldExtent) -> Self {
        Self {
            extent,
            heights: vec![0; extent.column_count()],
        }
    }

    /// The extent this map was allocated for.
    pub fn extent(&self) -> WorldExtent {
        self.extent
    }

    fn index(&self, x: i32, z: i32) -> Result<usize, WorldQueryError> {
        if !self.extent.contains(x, z) {
            return Err(WorldQueryError::OutOfRange {
                x,
                z,
                size: self.extent.size(),
            });
        }
        let side = self.extent.size() as usize;
        let col = (x - self.extent.min()) as usize;
        let row = (z - self.extent.min()) as usize;
        Ok(col * side + row)
    }

    /// Stack height at column `(x, z)`.
    pub fn height_at(&self, x: i32, z: i32) -> Result<u32, WorldQueryError> {
        Ok(self.heights[self.index(x, z)?])
    }

    /// Raise column `(x, z)` by `amount` blocks.
    pub fn raise(&mut self, x: i32, z: i32, amount: u32) -> Result<(), WorldQueryError> {
        let idx = self.index(x, z)?;
        self.heights[idx] += amount;
        Ok(())
    }

    /// Iterate every `((x, z), height)` pair, x-major.
    ///
    /// Storage shares the x-major layout of `WorldExtent::columns`, so the
    /// zip below pairs each coordinate with its own height.
    pub fn columns(&self) -> impl Iterator<Item = ((i32, i32), u32)> + '_ {
        self.extent.columns().zip(self.heights.iter().copied())
    }
}

impl ColumnHeightSource for VoxelMap {
    /// Floors `(x, z)` to column indices; never-initialized and out-of-extent
    /// columns read as 0 (water columns are not walkable height).
    fn column_height(&self, x: f64, z: f64) -> i32 {
        let cx = x.floor() as i32;
        let cz = z.floor() as i32;
        self.height_at(cx, cz).map(|h| h as i32).unwrap_or(0)
    }
}
