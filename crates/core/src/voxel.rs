//! Voxel type enumeration and per-face material parameters.

use serde::{Deserialize, Serialize};

/// Closed set of voxel types known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoxelType {
    /// Topmost block of a terrain column.
    Grass,
    /// Subsurface filler below grass.
    Dirt,
    /// Emitted where the terrain height drops to zero or below.
    Water,
    /// Tree trunk voxels.
    Wood,
    /// Tree canopy voxels.
    Leaf,
}

impl VoxelType {
    /// Every registered type, in catalog order.
    pub const ALL: [VoxelType; 5] = [
        VoxelType::Grass,
        VoxelType::Dirt,
        VoxelType::Water,
        VoxelType::Wood,
        VoxelType::Leaf,
    ];

    /// Stable index into catalog-ordered tables.
    pub fn index(self) -> usize {
        match self {
            VoxelType::Grass => 0,
            VoxelType::Dirt => 1,
            VoxelType::Water => 2,
            VoxelType::Wood => 3,
            VoxelType::Leaf => 4,
        }
    }

    /// Map a tree-template texture tag to a voxel type.
    ///
    /// Tag 1 is wood; every other value is leaf (the template format defines
    /// no further tags).
    pub fn from_template_tag(tag: i64) -> Self {
        if tag == 1 {
            VoxelType::Wood
        } else {
            VoxelType::Leaf
        }
    }
}

/// Cube face, in x+, x-, y+, y-, z+, z- order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFace {
    /// +X face.
    East,
    /// -X face.
    West,
    /// +Y face.
    Top,
    /// -Y face.
    Bottom,
    /// +Z face.
    South,
    /// -Z face.
    North,
}

impl BlockFace {
    /// Every face, in x+, x-, y+, y-, z+, z- order.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::East,
        BlockFace::West,
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::South,
        BlockFace::North,
    ];

    /// Index into a per-face material array.
    pub fn index(self) -> usize {
        match self {
            BlockFace::East => 0,
            BlockFace::West => 1,
            BlockFace::Top => 2,
            BlockFace::Bottom => 3,
            BlockFace::South => 4,
            BlockFace::North => 5,
        }
    }
}

/// Material parameters for a single cube face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMaterial {
    /// Texture path handed to the renderer.
    pub texture: &'static str,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Whether the face participates in alpha blending.
    pub alpha_blended: bool,
}

impl FaceMaterial {
    /// Fully opaque face with the given texture.
    pub const fn opaque(texture: &'static str) -> Self {
        Self {
            texture,
            opacity: 1.0,
            alpha_blended: false,
        }
    }

    /// Alpha-blended face with the given texture and opacity.
    pub const fn blended(texture: &'static str, opacity: f32) -> Self {
        Self {
            texture,
            opacity,
            alpha_blended: true,
        }
    }
}
