//! Tree placement over generated terrain.
//!
//! Trees are stamped from fixed templates onto columns sampled without
//! replacement from the candidate set (every column more than one block
//! tall), and each placed tree raises its column in the voxel map.

use rand::Rng;
use tracing::{debug, info, instrument, warn};
use voxelgrove_core::VoxelType;

use crate::terrain::InstanceBatchSet;
use crate::voxel_map::VoxelMap;

/// Number of height units a placed tree adds to its column.
pub const TREE_HEIGHT_CONTRIBUTION: u32 = 4;

/// One voxel of a tree template, relative to the template origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateVoxel {
    /// Offset from the template origin.
    pub offset: [f32; 3],
    /// Wood or leaf.
    pub voxel_type: VoxelType,
}

/// Fixed arrangement of wood/leaf voxels stamped per placed tree.
///
/// Loaded once and shared by reference for every placed instance; never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeTemplate {
    voxels: Vec<TemplateVoxel>,
}

impl TreeTemplate {
    /// Template from its voxel records, in document order.
    pub fn new(voxels: Vec<TemplateVoxel>) -> Self {
        Self { voxels }
    }

    /// The template's voxels, in document order.
    pub fn voxels(&self) -> &[TemplateVoxel] {
        &self.voxels
    }
}

/// The template pair selected between per placed tree.
///
/// Slots are `Option` so that a template whose document failed to load
/// degrades to the surviving one instead of aborting the pass.
#[derive(Debug, Clone, Default)]
pub struct TreeTemplateSet {
    primary: Option<TreeTemplate>,
    secondary: Option<TreeTemplate>,
}

impl TreeTemplateSet {
    /// Set from whichever templates loaded.
    pub fn new(primary: Option<TreeTemplate>, secondary: Option<TreeTemplate>) -> Self {
        Self { primary, secondary }
    }

    /// Whether both slots resolved.
    pub fn fully_loaded(&self) -> bool {
        self.primary.is_some() && self.secondary.is_some()
    }

    /// Whether no slot resolved.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Band selection over `r` in [0, 1).
    ///
    /// [0, 1/3) and [2/3, 1) both select the primary template, [1/3, 2/3) the
    /// secondary; the repeated primary band is intentional and gives it a 2:1
    /// weight. A missing slot falls back to the other.
    pub fn choose(&self, r: f64) -> Option<&TreeTemplate> {
        let preferred = if (1.0 / 3.0..2.0 / 3.0).contains(&r) {
            self.secondary.as_ref()
        } else {
            self.primary.as_ref()
        };
        preferred.or(self.primary.as_ref()).or(self.secondary.as_ref())
    }
}

/// Unbiased in-place Fisher-Yates permutation.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Samples tree sites from a populated voxel map and stamps templates there.
pub struct TreePlacer {
    count: usize,
}

impl TreePlacer {
    /// Placer that will try to place `count` trees.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Place up to `count` trees, returning how many were placed.
    ///
    /// Candidates are columns strictly more than one block tall (water and
    /// single-layer columns are excluded). The candidate list is shuffled and
    /// consumed front to back, so no two trees share a column; if it runs
    /// short the placer degrades to however many sites exist.
    #[instrument(skip_all, fields(requested = self.count))]
    pub fn place<R: Rng>(
        &self,
        rng: &mut R,
        templates: &TreeTemplateSet,
        map: &mut VoxelMap,
        batches: &mut InstanceBatchSet,
    ) -> usize {
        if templates.is_empty() {
            warn!("no tree templates loaded; skipping tree placement");
            return 0;
        }

        let mut candidates: Vec<(i32, i32)> = map
            .columns()
            .filter(|&(_, height)| height > 1)
            .map(|(column, _)| column)
            .collect();
        debug!(candidates = candidates.len(), "collected tree sites");

        fisher_yates(&mut candidates, rng);

        let mut placed = 0;
        for &(x, z) in candidates.iter().take(self.count) {
            let r = rng.gen::<f64>();
            let Some(template) = templates.choose(r) else {
                break;
            };

            let height = map.height_at(x, z).expect("candidate in extent");
            let base_y = (height - 1) as f32 + 0.5;
            for voxel in template.voxels() {
                batches.push(
                    voxel.voxel_type,
                    [
                        x as f32 + voxel.offset[0],
                        base_y + voxel.offset[1],
                        z as f32 + voxel.offset[2],
                    ],
                );
            }
            map.raise(x, z, TREE_HEIGHT_CONTRIBUTION)
                .expect("candidate in extent");
            placed += 1;
        }

        info!(placed, "tree placement complete");
        placed
    }
}
