//! Property-based tests for tree-site sampling.
//!
//! Critical invariants:
//! - The shuffle is a permutation (output multiset == input multiset) for
//!   every input size, including 0 and 1
//! - Placement never selects a column twice and never exceeds the candidate
//!   count

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use voxelgrove_core::{VoxelType, WorldExtent};
use voxelgrove_world::{
    fisher_yates, InstanceBatchSet, TemplateVoxel, TreePlacer, TreeTemplate, TreeTemplateSet,
    VoxelMap,
};

fn single_block_template() -> TreeTemplate {
    TreeTemplate::new(vec![TemplateVoxel {
        offset: [0.0, 0.0, 0.0],
        voxel_type: VoxelType::Wood,
    }])
}

proptest! {
    /// Property: shuffling rearranges, never adds, drops or duplicates.
    #[test]
    fn shuffle_is_a_permutation(
        items in prop::collection::vec(any::<u32>(), 0..64),
        rng_seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let mut shuffled = items.clone();
        fisher_yates(&mut shuffled, &mut rng);

        let mut expected = items;
        expected.sort_unstable();
        let mut actual = shuffled;
        actual.sort_unstable();
        prop_assert_eq!(expected, actual);
    }

    /// Property: every placed tree claims a distinct eligible column.
    #[test]
    fn placement_samples_without_replacement(
        rng_seed in any::<u64>(),
        tall_height in 2u32..12,
        requested in 0usize..40,
    ) {
        let extent = WorldExtent::new(8);
        let mut map = VoxelMap::new(extent);
        // Raise a checkerboard of eligible columns; the rest stay at 0.
        let mut eligible = 0;
        for (x, z) in extent.columns() {
            if (x + z) % 2 == 0 {
                map.raise(x, z, tall_height).unwrap();
                eligible += 1;
            }
        }

        let templates = TreeTemplateSet::new(Some(single_block_template()), None);
        let mut batches = InstanceBatchSet::new();
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let placed = TreePlacer::new(requested).place(&mut rng, &templates, &mut map, &mut batches);

        prop_assert_eq!(placed, requested.min(eligible));

        // Each tree raised exactly one column by 4; columns are distinct, so
        // the number of changed columns equals the number of placed trees.
        let mut changed = 0;
        for ((x, z), height) in map.columns() {
            if (x + z) % 2 == 0 {
                prop_assert!(height == tall_height || height == tall_height + 4);
                if height != tall_height {
                    changed += 1;
                }
            } else {
                prop_assert_eq!(height, 0, "ineligible column ({}, {}) touched", x, z);
            }
        }
        prop_assert_eq!(changed, placed);
    }
}
