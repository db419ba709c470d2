mod noise;
mod terrain;
mod trees;
mod voxel_map;

pub use noise::*;
pub use terrain::*;
pub use trees::*;
pub use voxel_map::*;
