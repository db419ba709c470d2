#![warn(missing_docs)]
//! User-authored voxel modeling over a small fixed grid.
//!
//! The editor grid is fully independent of the open-world height map: it
//! stores discrete editable voxels keyed by cell, never stack heights, and
//! nothing here touches the world-generation pipeline.

mod grid;
mod persist;

pub use grid::{
    CellPos, CursorMove, CycleDirection, EditableVoxel, EditorGrid, HeightIndicator,
};
pub use persist::{
    load_document, save_document, saved_records, PersistError, SavedPosition, SavedVoxel,
};
