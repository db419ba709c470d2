#![warn(missing_docs)]
//! Deterministic test doubles for world generation and motion.

use voxelgrove_core::{ColumnHeightSource, WorldExtent};
use voxelgrove_world::{TerrainNoise, VoxelMap};

/// Noise source returning the same value everywhere.
///
/// With the default terrain parameters a value of 0.5 yields 12-block
/// columns, -1.0 yields water everywhere.
pub struct ConstantNoise(pub f64);

impl TerrainNoise for ConstantNoise {
    fn sample(&self, _x: f64, _z: f64) -> f64 {
        self.0
    }
}

/// Terrain of a fixed height everywhere, for controller tests.
pub struct FlatTerrain(pub i32);

impl ColumnHeightSource for FlatTerrain {
    fn column_height(&self, _x: f64, _z: f64) -> i32 {
        self.0
    }
}

/// Voxel map with every column raised to `height`.
pub fn flat_map(extent: WorldExtent, height: u32) -> VoxelMap {
    let mut map = VoxelMap::new(extent);
    if height > 0 {
        for (x, z) in extent.columns() {
            map.raise(x, z, height).expect("column in extent");
        }
    }
    map
}
