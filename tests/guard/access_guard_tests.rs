/*!
 * Access Guard Tests
 */

use shard_registry::{AccessMode, ExclusiveHandle, PartitionGuard, Registry, SharedHandle};
use std::collections::BTreeMap;

type Map = BTreeMap<String, u64>;

fn describe<G: PartitionGuard>(guard: &G) -> (usize, AccessMode, bool) {
    (guard.partition(), guard.mode(), guard.is_exclusive())
}

#[test]
fn test_exclusive_guard_reports_mode() {
    let registry: Registry<String, u64> = Registry::new(4).unwrap();
    let key = "carol".to_string();

    let guard: ExclusiveHandle<'_, String, u64> = registry.get_exclusive(&key).unwrap();
    assert_eq!(
        describe(&guard),
        (registry.partition_for(&key), AccessMode::Exclusive, true)
    );
}

#[test]
fn test_shared_guard_reports_mode() {
    let registry: Registry<String, u64> = Registry::new(4).unwrap();
    let key = "dave".to_string();

    let guard: SharedHandle<'_, Map> = registry.get_shared(&key).unwrap();
    assert_eq!(
        describe(&guard),
        (registry.partition_for(&key), AccessMode::Shared, false)
    );
}

#[test]
fn test_guard_is_transparent_proxy() {
    let registry: Registry<String, u64> = Registry::new(1).unwrap();

    {
        let mut guard = registry.get_exclusive(&"x".to_string()).unwrap();
        guard.insert("x".to_string(), 1);
        guard.insert("y".to_string(), 2);

        // Same container, not a copy: reads through the guard see the writes
        assert_eq!(guard.len(), 2);
        assert_eq!(guard.first_key_value(), Some((&"x".to_string(), &1)));
    }

    let guard = registry.get_shared(&"y".to_string()).unwrap();
    let collected: Vec<(&String, &u64)> = guard.iter().collect();
    assert_eq!(collected.len(), 2);
}

#[test]
fn test_guard_debug_output() {
    let registry: Registry<u64, u64> = Registry::new(1).unwrap();

    let exclusive = registry.get_exclusive(&1).unwrap();
    assert_eq!(
        format!("{:?}", exclusive),
        "ExclusiveAccess { partition: 0, len: 0 }"
    );
    drop(exclusive);

    let shared = registry.get_shared(&1).unwrap();
    assert_eq!(format!("{:?}", shared), "SharedAccess { partition: 0, .. }");
}

#[test]
fn test_sequential_guards_on_same_partition() {
    let registry: Registry<u64, u64> = Registry::new(1).unwrap();

    for i in 0..10u64 {
        let mut guard = registry.get_exclusive(&i).unwrap();
        guard.insert(i, i * i);
    }

    assert_eq!(registry.size(), 10);
    assert_eq!(registry.get_cloned(&9).unwrap(), Some(81));
}
