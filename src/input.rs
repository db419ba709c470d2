//! Abstract pressed-this-frame input snapshots.
//!
//! Raw event capture belongs to the windowing collaborator; the engine only
//! consumes these snapshots and turns them into movement intents and editor
//! operations.

use glam::Vec2;
use voxelgrove_editor::{CursorMove, CycleDirection, EditorGrid};

/// Movement keys held during one frame of the open world.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Edge trigger; the controller ignores it while airborne.
    pub jump: bool,
}

impl FrameInput {
    /// Horizontal intent for this frame, normalized then scaled by
    /// `speed * dt` so the controller can apply it directly.
    ///
    /// x is the +X axis, y the +Z axis; forward is -Z.
    pub fn horizontal_intent(&self, speed: f32, dt: f32) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.forward {
            direction.y -= 1.0;
        }
        if self.back {
            direction.y += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        if direction == Vec2::ZERO {
            return direction;
        }
        direction.normalize() * speed * dt
    }
}

/// Editor keys pressed during one frame of the modeling mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorInput {
    pub move_neg_x: bool,
    pub move_pos_x: bool,
    pub move_neg_z: bool,
    pub move_pos_z: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub insert: bool,
    pub remove: bool,
    pub next_type: bool,
    pub previous_type: bool,
}

/// Apply one frame of editor input to the grid.
///
/// Every operation is a silent no-op when invalid (clamped move, occupied
/// insert, empty remove), so nothing here can fail the frame loop.
pub fn apply_editor_input(grid: &mut EditorGrid, input: &EditorInput) {
    if input.move_neg_x {
        grid.move_cursor(CursorMove::NegX);
    }
    if input.move_pos_x {
        grid.move_cursor(CursorMove::PosX);
    }
    if input.move_neg_z {
        grid.move_cursor(CursorMove::NegZ);
    }
    if input.move_pos_z {
        grid.move_cursor(CursorMove::PosZ);
    }
    if input.move_up {
        grid.move_cursor(CursorMove::Up);
    }
    if input.move_down {
        grid.move_cursor(CursorMove::Down);
    }
    if input.insert {
        grid.insert();
    }
    if input.remove {
        grid.remove();
    }
    if input.next_type {
        grid.cycle_type(CycleDirection::Next);
    }
    if input.previous_type {
        grid.cycle_type(CycleDirection::Previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelgrove_core::VoxelCatalog;

    #[test]
    fn diagonal_intent_is_normalized() {
        let input = FrameInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        let intent = input.horizontal_intent(5.0, 0.1);
        assert!((intent.length() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn idle_frames_yield_zero_intent() {
        let intent = FrameInput::default().horizontal_intent(5.0, 0.1);
        assert_eq!(intent, Vec2::ZERO);
    }

    #[test]
    fn editor_frame_applies_in_order() {
        let mut grid = EditorGrid::new(VoxelCatalog::standard());
        apply_editor_input(
            &mut grid,
            &EditorInput {
                move_pos_x: true,
                insert: true,
                ..Default::default()
            },
        );
        assert_eq!(grid.voxel_count(), 1);
        assert_eq!(grid.cursor_position()[0], 0.5);
    }
}
