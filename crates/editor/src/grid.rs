//! Editable voxel grid, cursor and height indicators.

use std::collections::HashMap;

use voxelgrove_core::{TypeCursor, VoxelCatalog, VoxelType, WorldExtent, WorldMode};

/// Integer cell index within the editor cube.
///
/// Cells map to world-space cube centers through the grid's extent (see
/// [`EditorGrid::world_of`]); storing integers keeps the occupancy map free
/// of float keys while serialization still emits the exact world positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    /// Cell x index.
    pub x: i32,
    /// Cell y index (0 is the layer resting on the ground plane).
    pub y: i32,
    /// Cell z index.
    pub z: i32,
}

/// One-cell cursor translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One cell toward -X.
    NegX,
    /// One cell toward +X.
    PosX,
    /// One cell toward -Z.
    NegZ,
    /// One cell toward +Z.
    PosZ,
    /// One cell up.
    Up,
    /// One cell down.
    Down,
}

impl CursorMove {
    fn delta(self) -> (i32, i32, i32) {
        match self {
            CursorMove::NegX => (-1, 0, 0),
            CursorMove::PosX => (1, 0, 0),
            CursorMove::NegZ => (0, 0, -1),
            CursorMove::PosZ => (0, 0, 1),
            CursorMove::Up => (0, 1, 0),
            CursorMove::Down => (0, -1, 0),
        }
    }
}

/// Direction for cycling the selected voxel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Advance to the next placeable type.
    Next,
    /// Retreat to the previous placeable type.
    Previous,
}

/// Visual marker showing the vertical extent of one editable voxel.
///
/// A column of sample points from the ground plane up to the voxel's center,
/// at 0.2 steps. Purely visual; owned by its voxel and dropped with it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightIndicator {
    points: Vec<[f32; 3]>,
}

impl HeightIndicator {
    /// Indicator for a voxel centered at `position`.
    pub fn for_position(position: [f32; 3]) -> Self {
        let [x, end_y, z] = position;
        let count = (end_y / 0.2).ceil().max(0.0) as usize;
        let points = (0..count).map(|i| [x, i as f32 * 0.2, z]).collect();
        Self { points }
    }

    /// Sample points from the ground plane up to the voxel.
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }
}

/// One placed voxel with its indicator.
#[derive(Debug, Clone)]
pub struct EditableVoxel {
    /// The voxel's type tag.
    pub voxel_type: VoxelType,
    /// Visual height marker, dropped together with the voxel.
    pub indicator: HeightIndicator,
}

/// Modeling grid over a fixed cube extent with a movable insertion cursor.
///
/// Invalid requests (move past the bounds, insert on an occupied cell,
/// remove on an empty cell) are no-ops signalled by the `bool` return, never
/// errors.
pub struct EditorGrid {
    extent: WorldExtent,
    catalog: VoxelCatalog,
    cursor: CellPos,
    cursor_type: TypeCursor,
    voxels: HashMap<CellPos, EditableVoxel>,
    /// Insertion order of `voxels` keys; serialization walks this.
    order: Vec<CellPos>,
}

impl EditorGrid {
    /// Grid over the fixed editor extent.
    pub fn new(catalog: VoxelCatalog) -> Self {
        Self::with_extent(catalog, WorldExtent::of(WorldMode::EditorGrid))
    }

    /// Grid over an explicit extent (tests use small ones).
    pub fn with_extent(catalog: VoxelCatalog, extent: WorldExtent) -> Self {
        Self {
            extent,
            catalog,
            cursor: CellPos { x: 0, y: 0, z: 0 },
            cursor_type: TypeCursor::new(),
            voxels: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The extent this grid is bounded to.
    pub fn extent(&self) -> WorldExtent {
        self.extent
    }

    /// The catalog types are resolved against.
    pub fn catalog(&self) -> &VoxelCatalog {
        &self.catalog
    }

    /// World-space cube center of `cell`.
    ///
    /// Even extents center the lattice off the origin (cell (0,0,0) sits at
    /// (-0.5, 0.5, 0.5)); odd extents put it on the origin at (0, 0.5, 0).
    pub fn world_of(&self, cell: CellPos) -> [f32; 3] {
        let y = cell.y as f32 + 0.5;
        if self.extent.size() % 2 == 0 {
            [cell.x as f32 - 0.5, y, cell.z as f32 + 0.5]
        } else {
            [cell.x as f32, y, cell.z as f32]
        }
    }

    /// Cell whose cube center is nearest to `position`.
    pub fn cell_of(&self, position: [f32; 3]) -> CellPos {
        let [x, y, z] = position;
        let cy = (y - 0.5).round() as i32;
        if self.extent.size() % 2 == 0 {
            CellPos {
                x: (x + 0.5).round() as i32,
                y: cy,
                z: (z - 0.5).round() as i32,
            }
        } else {
            CellPos {
                x: x.round() as i32,
                y: cy,
                z: z.round() as i32,
            }
        }
    }

    fn in_bounds(&self, cell: CellPos) -> bool {
        let [x, y, z] = self.world_of(cell);
        let horizontal_limit = (self.extent.size() / 2 - 1) as f32;
        let vertical_limit = (self.extent.size() / 2) as f32;
        x >= -horizontal_limit
            && x <= horizontal_limit
            && z >= -horizontal_limit
            && z <= horizontal_limit
            && y >= 0.5
            && y <= vertical_limit
    }

    /// Translate the cursor one cell; out-of-range requests are no-ops.
    pub fn move_cursor(&mut self, direction: CursorMove) -> bool {
        let (dx, dy, dz) = direction.delta();
        let candidate = CellPos {
            x: self.cursor.x + dx,
            y: self.cursor.y + dy,
            z: self.cursor.z + dz,
        };
        if !self.in_bounds(candidate) {
            return false;
        }
        self.cursor = candidate;
        true
    }

    /// World-space position of the cursor marker.
    pub fn cursor_position(&self) -> [f32; 3] {
        self.world_of(self.cursor)
    }

    /// The type the next insert will place.
    pub fn selected_type(&self) -> VoxelType {
        self.cursor_type.current(&self.catalog)
    }

    /// Cycle the selected type; only the cursor marker changes skin, already
    /// placed voxels keep theirs.
    pub fn cycle_type(&mut self, direction: CycleDirection) -> VoxelType {
        match direction {
            CycleDirection::Next => self.cursor_type.advance(&self.catalog),
            CycleDirection::Previous => self.cursor_type.retreat(&self.catalog),
        }
    }

    /// Place a voxel of the selected type at the cursor.
    ///
    /// Returns `false` without changes when the cell is already occupied.
    pub fn insert(&mut self) -> bool {
        self.insert_at(self.cursor, self.selected_type())
    }

    pub(crate) fn insert_at(&mut self, cell: CellPos, voxel_type: VoxelType) -> bool {
        if self.voxels.contains_key(&cell) {
            return false;
        }
        let indicator = HeightIndicator::for_position(self.world_of(cell));
        self.voxels.insert(
            cell,
            EditableVoxel {
                voxel_type,
                indicator,
            },
        );
        self.order.push(cell);
        true
    }

    /// Remove the voxel under the cursor, disposing its indicator.
    ///
    /// Returns `false` when the cell is empty.
    pub fn remove(&mut self) -> bool {
        let cell = self.cursor;
        if self.voxels.remove(&cell).is_none() {
            return false;
        }
        self.order.retain(|&c| c != cell);
        true
    }

    /// Drop every placed voxel and indicator.
    pub(crate) fn clear(&mut self) {
        self.voxels.clear();
        self.order.clear();
    }

    /// Number of placed voxels.
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// The voxel at `cell`, if any.
    pub fn voxel_at(&self, cell: CellPos) -> Option<&EditableVoxel> {
        self.voxels.get(&cell)
    }

    /// Placed voxels as (world position, type), in insertion order.
    pub fn placed(&self) -> impl Iterator<Item = ([f32; 3], VoxelType)> + '_ {
        self.order.iter().map(|cell| {
            let voxel = &self.voxels[cell];
            (self.world_of(*cell), voxel.voxel_type)
        })
    }

    /// Height indicators of every placed voxel, in insertion order.
    pub fn indicators(&self) -> impl Iterator<Item = &HeightIndicator> + '_ {
        self.order.iter().map(|cell| &self.voxels[cell].indicator)
    }
}
