//! Session configuration loaded from TOML, with full defaults.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;
use voxelgrove_core::WorldExtent;
use voxelgrove_physics::MotionParams;
use voxelgrove_world::TerrainParams;

const DEFAULT_CONFIG_PATH: &str = "config/voxelgrove.toml";

/// Engine configuration, one section per subsystem.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    pub terrain: TerrainSection,
    pub trees: TreeSection,
    pub motion: MotionSection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TerrainSection {
    /// Coordinate scale applied before sampling noise.
    pub frequency: f64,
    /// Noise amplitude in blocks.
    pub amplitude: f64,
    /// Height offset in blocks added to every sample.
    pub base_height: f64,
}

impl Default for TerrainSection {
    fn default() -> Self {
        let params = TerrainParams::default();
        Self {
            frequency: params.frequency,
            amplitude: params.amplitude,
            base_height: params.base_height,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TreeSection {
    /// Trees to place per column of world side length (0.2 => 40 trees at
    /// the default extent of 200).
    pub density: f64,
    /// Path of the primary template document.
    pub primary_template: String,
    /// Path of the secondary template document.
    pub secondary_template: String,
}

impl Default for TreeSection {
    fn default() -> Self {
        Self {
            density: 0.2,
            primary_template: "templates/tree1.json".to_string(),
            secondary_template: "templates/tree2.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionSection {
    /// Vertical acceleration in blocks/s^2 (negative is down).
    pub gravity: f32,
    /// Vertical velocity applied on jump, in blocks/s.
    pub jump_impulse: f32,
    /// Agent reference point height above the ground.
    pub eye_offset: f32,
    /// Walking-character speed in blocks/s.
    pub walk_speed: f32,
    /// Free-rig speed in blocks/s.
    pub fly_speed: f32,
}

impl Default for MotionSection {
    fn default() -> Self {
        let params = MotionParams::default();
        Self {
            gravity: params.gravity,
            jump_impulse: params.jump_impulse,
            eye_offset: params.eye_offset,
            walk_speed: 5.0,
            fly_speed: 20.0,
        }
    }
}

impl SessionConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on
    /// errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SessionConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SessionConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                SessionConfig::default()
            }
        }
    }

    /// Terrain parameters for the generator.
    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            frequency: self.terrain.frequency,
            amplitude: self.terrain.amplitude,
            base_height: self.terrain.base_height,
        }
    }

    /// Motion parameters for controllers.
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            gravity: self.motion.gravity,
            jump_impulse: self.motion.jump_impulse,
            eye_offset: self.motion.eye_offset,
        }
    }

    /// Number of trees to place for the given extent.
    pub fn tree_count(&self, extent: WorldExtent) -> usize {
        (self.trees.density * extent.size() as f64) as usize
    }
}
