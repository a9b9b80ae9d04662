/*!
 * Partition Selector Properties
 */

use proptest::prelude::*;
use shard_registry::{Registry, Selector};

proptest! {
    #[test]
    fn prop_selection_in_range(key in any::<u64>(), partitions in 1usize..2048) {
        let selector = Selector::new(partitions).unwrap();
        prop_assert!(selector.select(&key) < partitions);
    }

    #[test]
    fn prop_selection_deterministic(
        key in prop::collection::vec(any::<u8>(), 0..64),
        partitions in 1usize..1024,
    ) {
        let first = Selector::new(partitions).unwrap();
        let second = Selector::new(partitions).unwrap();
        prop_assert_eq!(first.select(&key), first.select(&key));
        prop_assert_eq!(first.select(&key), second.select(&key));
    }

    #[test]
    fn prop_registry_routes_like_selector(key in any::<u64>(), partitions in 1usize..256) {
        let registry: Registry<u64, u64> = Registry::new(partitions).unwrap();
        let selector = Selector::new(partitions).unwrap();
        prop_assert_eq!(registry.partition_for(&key), selector.select(&key));
    }

    #[test]
    fn prop_insert_lands_in_selected_partition(
        keys in prop::collection::hash_set(any::<u32>(), 1..200),
        partitions in 1usize..16,
    ) {
        let registry: Registry<u32, u32> = Registry::new(partitions).unwrap();
        for &key in &keys {
            registry.insert(key, key).unwrap();
        }

        prop_assert_eq!(registry.size(), keys.len());
        for &key in &keys {
            let partition = registry.get_shared_at(registry.partition_for(&key)).unwrap();
            prop_assert_eq!(partition.get(&key), Some(&key));
        }
    }
}
