//! Noise sources for terrain generation.
//!
//! The generator samples a deterministic 2D noise source per column; tests
//! substitute fixed-value sources through the same trait.

use noise::{NoiseFn, Simplex};

/// Deterministic 2D noise source sampled once per terrain column.
pub trait TerrainNoise {
    /// Sample at pre-scaled coordinates.
    ///
    /// Returns a value in [-1.0, 1.0]; identical inputs must return identical
    /// values for generation to be reproducible.
    fn sample(&self, x: f64, z: f64) -> f64;
}

/// Simplex-backed production noise source.
pub struct SimplexTerrainNoise {
    simplex: Simplex,
}

impl SimplexTerrainNoise {
    /// Create a noise source from a world seed.
    pub fn new(world_seed: u64) -> Self {
        Self {
            simplex: Simplex::new(world_seed as u32),
        }
    }
}

impl TerrainNoise for SimplexTerrainNoise {
    fn sample(&self, x: f64, z: f64) -> f64 {
        self.simplex.get([x, z])
    }
}
