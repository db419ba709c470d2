//! Terrain synthesis from noise into per-type instance batches.
//!
//! Every column of the extent gets a stack of unit blocks whose height is
//! derived from the noise sample; blocks are grouped into one renderable
//! batch per voxel type so draw calls scale with the type count.

use tracing::{debug, info, instrument};
use voxelgrove_core::VoxelType;

use crate::noise::TerrainNoise;
use crate::voxel_map::VoxelMap;

/// Tunable parameters for terrain synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Coordinate scale applied before sampling noise.
    pub frequency: f64,
    /// Noise amplitude in blocks.
    pub amplitude: f64,
    /// Height offset in blocks added to every sample.
    pub base_height: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            frequency: 0.012,
            amplitude: 8.0,
            base_height: 8.0,
        }
    }
}

/// A renderable group of identical unit cubes sharing one material set.
///
/// Placements are translations only (no rotation) of the cube center.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    /// Type shared by every placement in the batch.
    pub voxel_type: VoxelType,
    /// Cube-center translations, in emission order.
    pub placements: Vec<[f32; 3]>,
}

/// Accumulator for placements, one slot per voxel type.
///
/// Shared between the terrain generator and the tree placer so tree voxels
/// land in the same wood/leaf batches; converting to batches drops types with
/// no placements (a zero-instance batch is a degenerate render object).
#[derive(Debug, Default)]
pub struct InstanceBatchSet {
    placements: [Vec<[f32; 3]>; VoxelType::ALL.len()],
}

impl InstanceBatchSet {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one cube-center translation for `voxel_type`.
    pub fn push(&mut self, voxel_type: VoxelType, placement: [f32; 3]) {
        self.placements[voxel_type.index()].push(placement);
    }

    /// Number of placements accumulated for `voxel_type`.
    pub fn count(&self, voxel_type: VoxelType) -> usize {
        self.placements[voxel_type.index()].len()
    }

    /// Convert into batches, omitting empty types.
    pub fn into_batches(self) -> Vec<InstanceBatch> {
        VoxelType::ALL
            .into_iter()
            .zip(self.placements)
            .filter(|(_, placements)| !placements.is_empty())
            .map(|(voxel_type, placements)| InstanceBatch {
                voxel_type,
                placements,
            })
            .collect()
    }
}

/// Terrain generator over a noise source and a voxel map.
pub struct TerrainGenerator {
    params: TerrainParams,
}

impl TerrainGenerator {
    /// Create a generator with the given parameters.
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }

    /// Parameters this generator samples with.
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Column height for one noise sample: `floor(n * amplitude + base)`.
    pub fn column_height(&self, noise_value: f64) -> i32 {
        (noise_value * self.params.amplitude + self.params.base_height).floor() as i32
    }

    /// Populate `map` from `noise` and accumulate placements into `batches`.
    ///
    /// Columns with derived height > 0 get that many stacked blocks at
    /// half-integer centers, dirt below and grass on top, and the map is
    /// raised by the same amount. Columns at height <= 0 get a single water
    /// block at y = 0.5 and the map is left at 0 for that column.
    ///
    /// Generation is a pure function of (extent, noise, params): re-running
    /// with identical inputs reproduces identical map and batch contents.
    #[instrument(skip(self, noise, map, batches), fields(extent = map.extent().size()))]
    pub fn generate(
        &self,
        noise: &dyn TerrainNoise,
        map: &mut VoxelMap,
        batches: &mut InstanceBatchSet,
    ) {
        debug!("starting terrain generation");
        let extent = map.extent();

        for (x, z) in extent.columns() {
            let sample = noise.sample(
                x as f64 * self.params.frequency,
                z as f64 * self.params.frequency,
            );
            let height = self.column_height(sample);

            if height > 0 {
                for y in 0..height {
                    let voxel_type = if y == height - 1 {
                        VoxelType::Grass
                    } else {
                        VoxelType::Dirt
                    };
                    batches.push(voxel_type, [x as f32, y as f32 + 0.5, z as f32]);
                }
                map.raise(x, z, height as u32).expect("column in extent");
            } else {
                batches.push(VoxelType::Water, [x as f32, 0.5, z as f32]);
            }
        }

        info!(
            grass = batches.count(VoxelType::Grass),
            dirt = batches.count(VoxelType::Dirt),
            water = batches.count(VoxelType::Water),
            "terrain generation complete"
        );
    }
}
