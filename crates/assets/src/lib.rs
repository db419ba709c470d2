#![warn(missing_docs)]
//! Tree template schema + loading helpers.

mod loader;

pub use loader::{template_from_file, template_from_str};

use serde::Deserialize;
use thiserror::Error;

/// One voxel record of a tree template document.
#[derive(Debug, Deserialize)]
pub struct TemplateRecord {
    /// Offset from the template origin.
    pub position: TemplatePosition,
    /// Texture tag: 1 is wood, anything else is leaf.
    pub texture: i64,
}

/// Position payload of a template record.
#[derive(Debug, Deserialize)]
pub struct TemplatePosition {
    /// X offset.
    pub x: f32,
    /// Y offset.
    pub y: f32,
    /// Z offset.
    pub z: f32,
}

/// Errors emitted during template loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading template documents.
    #[error("failed to read tree template: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse tree template: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON string into the raw record list.
pub fn load_records_from_str(input: &str) -> Result<Vec<TemplateRecord>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
