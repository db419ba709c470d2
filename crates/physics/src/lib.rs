#![warn(missing_docs)]
//! Grounded vertical motion over a column-height terrain.
//!
//! One controller per moving agent (first-person rig or walking character).
//! The controller owns position, vertical velocity and facing; the caller
//! supplies per-tick horizontal intent already scaled by speed and delta
//! time, plus an edge-triggered jump request.

use glam::{Vec2, Vec3};
use voxelgrove_core::ColumnHeightSource;

/// Vertical motion mode of an agent relative to terrain height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Resting on the terrain surface.
    Grounded,
    /// Falling or jumping.
    Airborne,
}

/// Tunable motion constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Vertical acceleration in blocks/s^2 (negative is down).
    pub gravity: f32,
    /// Vertical velocity applied on jump, in blocks/s.
    pub jump_impulse: f32,
    /// Height of the agent's reference point above the ground it stands on.
    pub eye_offset: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            gravity: -20.0,
            jump_impulse: 10.0,
            eye_offset: 1.5,
        }
    }
}

/// How horizontal moves interact with rising terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Always commit the move. The free-flying rig uses this and may clip
    /// through rising terrain.
    Clip,
    /// Reject a move into a column whose ground level is above the agent's
    /// current vertical position. The walking character uses this.
    BlockAscent,
}

/// Per-agent gravity, jump and grounding over a height-queried terrain.
#[derive(Debug, Clone)]
pub struct GroundedMotionController {
    params: MotionParams,
    policy: CollisionPolicy,
    position: Vec3,
    vertical_velocity: f32,
    yaw: f32,
    state: MotionState,
}

impl GroundedMotionController {
    /// Controller starting airborne at `position` with zero velocity.
    pub fn new(params: MotionParams, policy: CollisionPolicy, position: Vec3) -> Self {
        Self {
            params,
            policy,
            position,
            vertical_velocity: 0.0,
            yaw: 0.0,
            state: MotionState::Airborne,
        }
    }

    /// Current position of the agent's reference point.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current vertical velocity in blocks/s.
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Current facing angle around the y axis, in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current vertical motion mode.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Ground level (terrain height plus eye offset) under `(x, z)`.
    fn ground_level(&self, terrain: &dyn ColumnHeightSource, x: f32, z: f32) -> f32 {
        terrain.column_height(x as f64, z as f64) as f32 + self.params.eye_offset
    }

    /// Advance one tick.
    ///
    /// `intent` is the horizontal move for this tick (x, z), already
    /// normalized and scaled by speed and `dt` by the caller.
    /// `jump_requested` is an edge trigger: it takes effect only while
    /// grounded, so holding it down does not re-trigger mid-air.
    pub fn tick(
        &mut self,
        dt: f32,
        intent: Vec2,
        jump_requested: bool,
        terrain: &dyn ColumnHeightSource,
    ) {
        if jump_requested && self.state == MotionState::Grounded {
            self.vertical_velocity = self.params.jump_impulse;
            self.state = MotionState::Airborne;
        }

        // Horizontal move first, checked against the agent's current height;
        // a grounded agent sits exactly at ground level here, so flat moves
        // always pass while rising columns are rejected.
        let target_x = self.position.x + intent.x;
        let target_z = self.position.z + intent.y;
        let commit = match self.policy {
            CollisionPolicy::Clip => true,
            CollisionPolicy::BlockAscent => {
                self.ground_level(terrain, target_x, target_z) <= self.position.y
            }
        };
        if commit {
            self.position.x = target_x;
            self.position.z = target_z;
        }

        // Vertical integration runs in every state.
        self.vertical_velocity += self.params.gravity * dt;
        self.position.y += self.vertical_velocity * dt;

        // Snap to the ground when the integration step dropped below it.
        let ground = self.ground_level(terrain, self.position.x, self.position.z);
        if self.position.y < ground {
            self.position.y = ground;
            self.vertical_velocity = 0.0;
            self.state = MotionState::Grounded;
        }

        if intent != Vec2::ZERO {
            self.yaw = intent.x.atan2(intent.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat terrain at a fixed height.
    struct Flat(i32);

    impl ColumnHeightSource for Flat {
        fn column_height(&self, _x: f64, _z: f64) -> i32 {
            self.0
        }
    }

    /// Terrain with a step: height jumps from 2 to 6 at x >= 4.
    struct Step;

    impl ColumnHeightSource for Step {
        fn column_height(&self, x: f64, _z: f64) -> i32 {
            if x.floor() as i32 >= 4 {
                6
            } else {
                2
            }
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn walking(position: Vec3) -> GroundedMotionController {
        GroundedMotionController::new(MotionParams::default(), CollisionPolicy::BlockAscent, position)
    }

    #[test]
    fn falling_agent_settles_on_flat_ground() {
        let terrain = Flat(5);
        let mut controller = walking(Vec3::new(0.0, 20.0, 0.0));

        for _ in 0..600 {
            controller.tick(DT, Vec2::ZERO, false, &terrain);
        }

        assert_eq!(controller.state(), MotionState::Grounded);
        assert_eq!(controller.position().y, 5.0 + 1.5);
        assert_eq!(controller.vertical_velocity(), 0.0);
    }

    #[test]
    fn jump_triggers_once_per_press() {
        let terrain = Flat(0);
        let mut controller = walking(Vec3::new(0.0, 1.5, 0.0));
        controller.tick(DT, Vec2::ZERO, false, &terrain);
        assert_eq!(controller.state(), MotionState::Grounded);

        controller.tick(DT, Vec2::ZERO, true, &terrain);
        assert_eq!(controller.state(), MotionState::Airborne);
        let velocity_after_jump = controller.vertical_velocity();
        assert!(velocity_after_jump > 0.0);

        // Holding jump while airborne must not re-apply the impulse.
        controller.tick(DT, Vec2::ZERO, true, &terrain);
        assert!(controller.vertical_velocity() < velocity_after_jump);
        assert_eq!(controller.state(), MotionState::Airborne);
    }

    #[test]
    fn jump_reaches_apex_and_lands_back() {
        let terrain = Flat(0);
        let mut controller = walking(Vec3::new(0.0, 1.5, 0.0));
        controller.tick(DT, Vec2::ZERO, false, &terrain);

        controller.tick(DT, Vec2::ZERO, true, &terrain);
        let mut peak = controller.position().y;
        for _ in 0..600 {
            controller.tick(DT, Vec2::ZERO, false, &terrain);
            peak = peak.max(controller.position().y);
        }

        assert!(peak > 2.0, "jump should gain height, peaked at {peak}");
        assert_eq!(controller.state(), MotionState::Grounded);
        assert_eq!(controller.position().y, 1.5);
    }

    #[test]
    fn walking_character_cannot_climb_a_step() {
        let terrain = Step;
        // Standing at x = 3.5 on the low side.
        let mut controller = walking(Vec3::new(3.5, 3.5, 0.5));
        controller.tick(DT, Vec2::ZERO, false, &terrain);
        assert_eq!(controller.state(), MotionState::Grounded);

        // Push toward the high side for a second.
        for _ in 0..60 {
            controller.tick(DT, Vec2::new(0.1, 0.0), false, &terrain);
        }

        assert!(
            controller.position().x < 4.0,
            "move into the step should be rejected, x = {}",
            controller.position().x
        );
    }

    #[test]
    fn free_rig_clips_through_a_step() {
        let terrain = Step;
        let mut controller = GroundedMotionController::new(
            MotionParams::default(),
            CollisionPolicy::Clip,
            Vec3::new(3.5, 3.5, 0.5),
        );
        controller.tick(DT, Vec2::ZERO, false, &terrain);

        for _ in 0..60 {
            controller.tick(DT, Vec2::new(0.1, 0.0), false, &terrain);
        }

        assert!(controller.position().x > 4.0, "free rig commits every move");
        // Once inside the tall column the rig is snapped up onto it.
        assert_eq!(controller.position().y, 6.0 + 1.5);
    }

    #[test]
    fn facing_follows_intent() {
        let terrain = Flat(0);
        let mut controller = walking(Vec3::new(0.0, 1.5, 0.0));

        controller.tick(DT, Vec2::new(0.1, 0.0), false, &terrain);
        assert!((controller.yaw() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

        let yaw_before = controller.yaw();
        controller.tick(DT, Vec2::ZERO, false, &terrain);
        assert_eq!(controller.yaw(), yaw_before, "zero intent keeps facing");

        controller.tick(DT, Vec2::new(0.0, 0.1), false, &terrain);
        assert!(controller.yaw().abs() < 1e-6);
    }

    #[test]
    fn descending_terrain_makes_the_agent_fall() {
        let terrain = Step;
        // Grounded on the high side, walking toward the low side.
        let mut controller = walking(Vec3::new(4.5, 7.5, 0.5));
        controller.tick(DT, Vec2::ZERO, false, &terrain);
        assert_eq!(controller.state(), MotionState::Grounded);

        for _ in 0..30 {
            controller.tick(DT, Vec2::new(-0.1, 0.0), false, &terrain);
        }

        assert!(controller.position().x < 4.0);
        // Walked off the edge: falls until it grounds on the low side.
        for _ in 0..600 {
            controller.tick(DT, Vec2::ZERO, false, &terrain);
        }
        assert_eq!(controller.position().y, 2.0 + 1.5);
        assert_eq!(controller.state(), MotionState::Grounded);
    }
}
