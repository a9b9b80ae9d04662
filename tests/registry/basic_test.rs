/*!
 * Registry Semantics Tests
 */

use pretty_assertions::assert_eq;
use shard_registry::{
    AccessMode, PartitionGuard, Registry, RegistryBuilder, RegistryError, Selector,
};
use std::collections::{BTreeMap, HashSet};

#[test]
fn test_zero_partitions_never_constructs() {
    let result: Result<Registry<String, u64>, _> = Registry::new(0);
    assert_eq!(result.unwrap_err(), RegistryError::InvalidPartitionCount(0));
}

#[test]
fn test_insert_then_lookup_through_handles() {
    let registry: Registry<String, u64> = Registry::new(8).unwrap();
    let key = "alice".to_string();

    {
        let mut partition = registry.get_exclusive(&key).unwrap();
        assert_eq!(partition.mode(), AccessMode::Exclusive);
        assert_eq!(partition.insert(key.clone(), 0xC0A8_0001), None);
    }

    let partition = registry.get_shared(&key).unwrap();
    assert_eq!(partition.mode(), AccessMode::Shared);
    assert_eq!(partition.partition(), registry.partition_for(&key));
    assert_eq!(partition.get(&key), Some(&0xC0A8_0001));
}

#[test]
fn test_update_replaces_value() {
    let registry: Registry<u32, &str> = Registry::new(4).unwrap();

    registry.get_exclusive(&9).unwrap().insert(9, "first");
    let previous = registry.get_exclusive(&9).unwrap().insert(9, "second");

    assert_eq!(previous, Some("first"));
    assert_eq!(registry.get_cloned(&9).unwrap(), Some("second"));
    assert_eq!(registry.size(), 1);
}

#[test]
fn test_partition_disjointness() {
    let registry: Registry<u64, u64> = Registry::new(7).unwrap();

    for key in 0..2_000u64 {
        registry.insert(key * 31, key).unwrap();
    }

    let mut seen = HashSet::new();
    for index in 0..registry.partition_count() {
        let partition = registry.get_shared_at(index).unwrap();
        for key in partition.keys() {
            assert_eq!(registry.partition_for(key), index, "key {} misrouted", key);
            assert!(seen.insert(*key), "key {} stored twice", key);
        }
    }

    assert_eq!(seen.len(), 2_000);
    assert_eq!(registry.size(), 2_000);
}

#[test]
fn test_routing_matches_standalone_selector() {
    let registry: Registry<String, u8> = Registry::new(64).unwrap();
    let other: Registry<String, u8> = Registry::new(64).unwrap();
    let selector = Selector::new(64).unwrap();

    for i in 0..500 {
        let key = format!("user-{}", i);
        assert_eq!(registry.partition_for(&key), selector.select(&key));
        assert_eq!(registry.partition_for(&key), other.partition_for(&key));
    }
}

#[test]
fn test_partition_sizes_track_inserts() {
    let registry: Registry<u64, u64> = Registry::new(4).unwrap();

    for key in 0..100u64 {
        registry.insert(key, key).unwrap();
    }

    let mut expected = vec![0usize; 4];
    for key in 0..100u64 {
        expected[registry.partition_for(&key)] += 1;
    }

    assert_eq!(registry.partition_sizes(), expected);
}

#[test]
fn test_remove_updates_size() {
    let registry: Registry<u64, u64> = Registry::new(4).unwrap();

    registry.insert(1, 1).unwrap();
    registry.insert(2, 2).unwrap();
    assert_eq!(registry.remove(&1).unwrap(), Some(1));
    assert_eq!(registry.remove(&1).unwrap(), None);

    assert_eq!(registry.size(), 1);
    assert!(!registry.contains_key(&1).unwrap());
}

#[test]
fn test_size_is_published_when_handle_drops() {
    let registry: Registry<u64, u64> = Registry::new(2).unwrap();

    let mut partition = registry.get_exclusive(&5).unwrap();
    partition.insert(5, 50);
    partition.insert(6, 60);

    // size() takes no lock, so it cannot see inserts behind a held handle
    assert_eq!(registry.size(), 0);
    assert!(registry.is_empty());

    drop(partition);
    assert_eq!(registry.size(), 2);
}

#[test]
fn test_builder_with_hash_map_and_std_lock() {
    type Map = std::collections::HashMap<String, u32>;

    let registry: Registry<String, u32, Map, std::sync::RwLock<Map>> = RegistryBuilder::new()
        .partitions(3)
        .build()
        .unwrap();

    registry.insert("bob".to_string(), 3).unwrap();
    assert_eq!(registry.get_cloned(&"bob".to_string()).unwrap(), Some(3));
    assert_eq!(registry.partition_count(), 3);
}

#[test]
fn test_closure_access() {
    let registry: Registry<u64, BTreeMap<u64, u64>> = Registry::new(4).unwrap();

    registry
        .with_exclusive(&1, |map| {
            map.entry(1).or_default().insert(10, 100);
        })
        .unwrap();

    let inner_len = registry
        .with_shared(&1, |map| map.get(&1).map(BTreeMap::len))
        .unwrap();
    assert_eq!(inner_len, Some(1));
}
