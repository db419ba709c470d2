//! World-generation session: explicit owner of the map, catalog and batches.
//!
//! All world state lives here and is passed by reference into the generator,
//! placer and controllers; there are no module-level registries.

use std::path::Path;

use glam::Vec3;
use tracing::{info, warn};
use voxelgrove_assets::template_from_file;
use voxelgrove_core::{
    scoped_rng, ColumnHeightSource, VoxelCatalog, WorldExtent, WorldMode,
};
use voxelgrove_physics::{CollisionPolicy, GroundedMotionController, MotionParams};
use voxelgrove_world::{
    InstanceBatch, InstanceBatchSet, SimplexTerrainNoise, TerrainGenerator, TreePlacer,
    TreeTemplate, TreeTemplateSet, VoxelMap,
};

use crate::config::SessionConfig;

/// RNG salt for the tree-placement pass.
const TREE_PLACEMENT_SALT: u64 = 0x5452_4545;

/// One open-world generation session.
///
/// Owns the voxel map and the renderable batches; torn down with the open
/// world. The editor grid is a separate structure and never appears here.
pub struct WorldSession {
    seed: u64,
    catalog: VoxelCatalog,
    map: VoxelMap,
    batches: Vec<InstanceBatch>,
    placed_trees: usize,
}

impl WorldSession {
    /// Generate the open world: terrain first, then trees.
    ///
    /// Tree placement samples the map only after the terrain pass has fully
    /// populated it; callers must have resolved `templates` beforehand (the
    /// all-templates-loaded gate lives in [`load_templates`]).
    pub fn generate(config: &SessionConfig, seed: u64, templates: &TreeTemplateSet) -> Self {
        let extent = WorldExtent::of(WorldMode::OpenWorld);
        let mut map = VoxelMap::new(extent);
        let mut batches = InstanceBatchSet::new();

        let noise = SimplexTerrainNoise::new(seed);
        TerrainGenerator::new(config.terrain_params()).generate(&noise, &mut map, &mut batches);

        let mut rng = scoped_rng(seed, TREE_PLACEMENT_SALT);
        let placed_trees = TreePlacer::new(config.tree_count(extent)).place(
            &mut rng,
            templates,
            &mut map,
            &mut batches,
        );

        Self {
            seed,
            catalog: VoxelCatalog::standard(),
            map,
            batches: batches.into_batches(),
            placed_trees,
        }
    }

    /// Seed this session was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The session's height map.
    pub fn map(&self) -> &VoxelMap {
        &self.map
    }

    /// The session's material catalog.
    pub fn catalog(&self) -> &VoxelCatalog {
        &self.catalog
    }

    /// Renderable batches, one per voxel type present.
    pub fn batches(&self) -> &[InstanceBatch] {
        &self.batches
    }

    /// Trees placed during generation.
    pub fn placed_trees(&self) -> usize {
        self.placed_trees
    }

    /// Walking character standing on the terrain at the origin column.
    pub fn spawn_walker(&self, motion: MotionParams) -> GroundedMotionController {
        let ground = self.map.column_height(0.0, 0.0) as f32 + motion.eye_offset;
        GroundedMotionController::new(
            motion,
            CollisionPolicy::BlockAscent,
            Vec3::new(0.0, ground, 0.0),
        )
    }

    /// Free first-person rig hovering over the world.
    pub fn spawn_free_rig(&self, motion: MotionParams) -> GroundedMotionController {
        GroundedMotionController::new(motion, CollisionPolicy::Clip, Vec3::new(0.0, 15.0, 30.0))
    }
}

/// Load the template pair named by the config.
///
/// Each slot degrades independently: a template whose document is missing or
/// malformed is logged and left empty, and placement falls back to the other
/// template per tree. Placement must not start before this returns.
pub fn load_templates(config: &SessionConfig) -> TreeTemplateSet {
    let set = TreeTemplateSet::new(
        load_slot(Path::new(&config.trees.primary_template)),
        load_slot(Path::new(&config.trees.secondary_template)),
    );
    if set.fully_loaded() {
        info!("all tree templates loaded");
    } else if set.is_empty() {
        warn!("no tree templates loaded; the world will have no trees");
    } else {
        warn!("continuing with a partial template set");
    }
    set
}

fn load_slot(path: &Path) -> Option<TreeTemplate> {
    match template_from_file(path) {
        Ok(template) => Some(template),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to load tree template");
            None
        }
    }
}
