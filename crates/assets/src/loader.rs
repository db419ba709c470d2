use std::fs;
use std::path::Path;

use voxelgrove_core::VoxelType;
use voxelgrove_world::{TemplateVoxel, TreeTemplate};

use crate::AssetError;

/// Load a tree template from the provided JSON file path.
pub fn template_from_file(path: &Path) -> Result<TreeTemplate, AssetError> {
    let data = fs::read_to_string(path)?;
    template_from_str(&data)
}

/// Load a tree template from an in-memory JSON string.
pub fn template_from_str(input: &str) -> Result<TreeTemplate, AssetError> {
    let records = crate::load_records_from_str(input)?;
    Ok(TreeTemplate::new(
        records
            .into_iter()
            .map(|record| TemplateVoxel {
                offset: [record.position.x, record.position.y, record.position.z],
                voxel_type: VoxelType::from_template_tag(record.texture),
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE_JSON: &str = r#"[
        { "position": { "x": 0.0, "y": 0.0, "z": 0.0 }, "texture": 1 },
        { "position": { "x": 0.0, "y": 1.0, "z": 0.0 }, "texture": 1 },
        { "position": { "x": 1.0, "y": 2.0, "z": 0.0 }, "texture": 2 },
        { "position": { "x": -1.0, "y": 2.0, "z": 0.0 }, "texture": 0 }
    ]"#;

    #[test]
    fn parses_records_in_document_order() {
        let template = template_from_str(TEMPLATE_JSON).unwrap();
        let voxels = template.voxels();
        assert_eq!(voxels.len(), 4);
        assert_eq!(voxels[0].offset, [0.0, 0.0, 0.0]);
        assert_eq!(voxels[2].offset, [1.0, 2.0, 0.0]);
    }

    #[test]
    fn tag_one_is_wood_everything_else_is_leaf() {
        let template = template_from_str(TEMPLATE_JSON).unwrap();
        let types: Vec<_> = template.voxels().iter().map(|v| v.voxel_type).collect();
        assert_eq!(
            types,
            vec![
                VoxelType::Wood,
                VoxelType::Wood,
                VoxelType::Leaf,
                VoxelType::Leaf
            ]
        );
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = template_from_str("{ not json ]");
        assert!(matches!(result, Err(AssetError::Parse(_))));

        let result = template_from_str(r#"[{ "position": { "x": 0 }, "texture": 1 }]"#);
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = template_from_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(AssetError::Io(_))));
    }

    #[test]
    fn empty_document_yields_an_empty_template() {
        let template = template_from_str("[]").unwrap();
        assert!(template.voxels().is_empty());
    }
}
