//! Voxel type registry with per-face materials resolved once at construction.

use crate::voxel::{BlockFace, FaceMaterial, VoxelType};

mod textures {
    pub const GRASS_SIDE: &str = "textures/grass_side.png";
    pub const GRASS_TOP: &str = "textures/grass_top.png";
    pub const DIRT: &str = "textures/dirt.png";
    pub const WATER: &str = "textures/water.png";
    pub const WOOD: &str = "textures/wood.png";
    pub const LEAF: &str = "textures/leaf.png";
}

/// Immutable material definition for one voxel type.
///
/// Faces are stored in x+, x-, y+, y-, z+, z- order so that each face gets its
/// own material slot (avoids z-fighting from shared coplanar quads).
#[derive(Debug, Clone)]
pub struct VoxelDescriptor {
    /// The type this descriptor describes.
    pub voxel_type: VoxelType,
    faces: [FaceMaterial; 6],
}

impl VoxelDescriptor {
    /// Material of the given face.
    pub fn face(&self, face: BlockFace) -> &FaceMaterial {
        &self.faces[face.index()]
    }

    /// All six face materials, in x+, x-, y+, y-, z+, z- order.
    pub fn faces(&self) -> &[FaceMaterial; 6] {
        &self.faces
    }

    /// Texture of the x+ face.
    ///
    /// This is the path written into editor save documents and resolved back
    /// to a type on load, so it must be unique per type.
    pub fn primary_texture(&self) -> &'static str {
        self.faces[0].texture
    }

    fn uniform(voxel_type: VoxelType, material: FaceMaterial) -> Self {
        Self {
            voxel_type,
            faces: [material; 6],
        }
    }
}

/// Registry of voxel descriptors, fixed after construction.
#[derive(Debug, Clone)]
pub struct VoxelCatalog {
    descriptors: Vec<VoxelDescriptor>,
    placeable: Vec<VoxelType>,
}

impl VoxelCatalog {
    /// The standard five-type catalog used by the engine.
    pub fn standard() -> Self {
        let grass_side = FaceMaterial::opaque(textures::GRASS_SIDE);
        let descriptors = vec![
            VoxelDescriptor {
                voxel_type: VoxelType::Grass,
                faces: [
                    grass_side,
                    grass_side,
                    FaceMaterial::opaque(textures::GRASS_TOP),
                    FaceMaterial::opaque(textures::DIRT),
                    grass_side,
                    grass_side,
                ],
            },
            VoxelDescriptor::uniform(VoxelType::Dirt, FaceMaterial::opaque(textures::DIRT)),
            VoxelDescriptor::uniform(
                VoxelType::Water,
                FaceMaterial::blended(textures::WATER, 0.5),
            ),
            VoxelDescriptor::uniform(VoxelType::Wood, FaceMaterial::opaque(textures::WOOD)),
            VoxelDescriptor::uniform(VoxelType::Leaf, FaceMaterial::blended(textures::LEAF, 0.7)),
        ];

        Self {
            descriptors,
            placeable: vec![VoxelType::Wood, VoxelType::Leaf],
        }
    }

    /// Descriptor for the given type.
    pub fn descriptor(&self, voxel_type: VoxelType) -> &VoxelDescriptor {
        &self.descriptors[voxel_type.index()]
    }

    /// Types the editor may place, in cursor order.
    pub fn placeable(&self) -> &[VoxelType] {
        &self.placeable
    }

    /// Resolve a primary-texture path back to its type.
    ///
    /// Used by the editor load path to round-trip the save-format texture
    /// convention.
    pub fn type_for_texture(&self, path: &str) -> Option<VoxelType> {
        self.descriptors
            .iter()
            .find(|desc| desc.primary_texture() == path)
            .map(|desc| desc.voxel_type)
    }
}

/// Cursor over the catalog's placeable types.
///
/// Owned by whichever editor session is using it; the catalog itself stays
/// immutable.
#[derive(Debug, Clone, Default)]
pub struct TypeCursor {
    index: usize,
}

impl TypeCursor {
    /// Cursor starting at the first placeable type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected type.
    pub fn current(&self, catalog: &VoxelCatalog) -> VoxelType {
        catalog.placeable()[self.index]
    }

    /// Advance to the next placeable type, wrapping at the end.
    pub fn advance(&mut self, catalog: &VoxelCatalog) -> VoxelType {
        self.index = (self.index + 1) % catalog.placeable().len();
        self.current(catalog)
    }

    /// Retreat to the previous placeable type, wrapping at the start.
    pub fn retreat(&mut self, catalog: &VoxelCatalog) -> VoxelType {
        let len = catalog.placeable().len();
        self.index = (self.index + len - 1) % len;
        self.current(catalog)
    }
}
