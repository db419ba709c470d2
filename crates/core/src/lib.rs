#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod catalog;
pub mod extent;
pub mod voxel;

use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

// Re-export commonly used types
pub use catalog::{TypeCursor, VoxelCatalog, VoxelDescriptor};
pub use extent::{WorldExtent, WorldMode};
pub use voxel::{BlockFace, FaceMaterial, VoxelType};

/// Errors surfaced by world-model queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldQueryError {
    /// The queried column lies outside the configured world extent.
    #[error("column ({x}, {z}) outside world extent of size {size}")]
    OutOfRange {
        /// Column x index.
        x: i32,
        /// Column z index.
        z: i32,
        /// Side length of the extent that rejected the query.
        size: i32,
    },
}

/// Integer stack-height lookup shared by motion controllers.
///
/// Implementations floor world-space coordinates to column indices before the
/// lookup. Columns that were never raised above zero (water, or positions
/// outside the world extent) read as 0; callers must treat height 0 as
/// "no walkable stack" rather than solid ground at sea level.
pub trait ColumnHeightSource {
    /// Height of the column containing world-space `(x, z)`.
    fn column_height(&self, x: f64, z: f64) -> i32;
}

/// Helper to derive a reproducible RNG seeded by world seed + purpose salt.
pub fn scoped_rng(world_seed: u64, salt: u64) -> StdRng {
    let seed = world_seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed)
}
