//! One-shot save/load of the editor grid as a single JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use voxelgrove_core::VoxelType;

use crate::grid::EditorGrid;

/// One voxel record of the editor save document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedVoxel {
    /// World-space cube center.
    pub position: SavedPosition,
    /// Primary-texture path of the voxel's type (round-trip convention).
    pub texture: String,
}

/// Position payload of a saved voxel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPosition {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

/// Errors emitted by the save/load paths.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The document is not valid JSON for the save schema.
    #[error("failed to parse editor save document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Records for every placed voxel, in insertion order.
pub fn saved_records(grid: &EditorGrid) -> Vec<SavedVoxel> {
    grid.placed()
        .map(|([x, y, z], voxel_type)| SavedVoxel {
            position: SavedPosition { x, y, z },
            texture: grid
                .catalog()
                .descriptor(voxel_type)
                .primary_texture()
                .to_string(),
        })
        .collect()
}

/// Serialize the grid into one downloadable JSON blob.
pub fn save_document(grid: &EditorGrid) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&saved_records(grid))?)
}

/// Rebuild the grid from a JSON document, returning how many voxels loaded.
///
/// The whole document is parsed and every record resolved before the grid is
/// touched, so a malformed document leaves the grid in its pre-load state.
/// Unknown texture paths resolve to the first placeable type with a warning
/// (texture application is fire-and-forget on the render side).
pub fn load_document(grid: &mut EditorGrid, input: &str) -> Result<usize, PersistError> {
    let records: Vec<SavedVoxel> = serde_json::from_str(input)?;

    let fallback = grid.catalog().placeable()[0];
    let resolved: Vec<([f32; 3], VoxelType)> = records
        .into_iter()
        .map(|record| {
            let voxel_type = grid
                .catalog()
                .type_for_texture(&record.texture)
                .unwrap_or_else(|| {
                    warn!(texture = %record.texture, "unknown texture path; using fallback type");
                    fallback
                });
            let position = [record.position.x, record.position.y, record.position.z];
            (position, voxel_type)
        })
        .collect();

    grid.clear();
    let mut loaded = 0;
    for (position, voxel_type) in resolved {
        let cell = grid.cell_of(position);
        if grid.insert_at(cell, voxel_type) {
            loaded += 1;
        }
    }
    Ok(loaded)
}
