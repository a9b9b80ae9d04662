/*!
 * Poisoned Partition Tests
 *
 * With a poisoning lock, a panic under exclusive access surfaces as an
 * acquisition failure on that partition only
 */

use shard_registry::{Registry, RegistryBuilder, RegistryError};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use std::thread;

type Map = BTreeMap<u64, u64>;
type StdLocked = Registry<u64, u64, Map, RwLock<Map>>;

fn poison_partition_of(registry: &Arc<StdLocked>, key: u64) {
    let holder = Arc::clone(registry);
    let joined = thread::spawn(move || {
        let mut partition = holder.get_exclusive(&key).unwrap();
        partition.insert(key, 1);
        panic!("writer dies holding the partition");
    })
    .join();
    assert!(joined.is_err());
}

#[test]
fn test_poisoned_partition_reports_failure() {
    let registry: Arc<StdLocked> = Arc::new(RegistryBuilder::new().partitions(4).build().unwrap());
    let key = 11u64;
    let index = registry.partition_for(&key);

    poison_partition_of(&registry, key);

    assert!(registry.is_poisoned(index).unwrap());
    assert_eq!(
        registry.get_exclusive(&key).unwrap_err(),
        RegistryError::LockPoisoned { partition: index }
    );
    assert_eq!(
        registry.get_shared(&key).unwrap_err(),
        RegistryError::LockPoisoned { partition: index }
    );
}

#[test]
fn test_other_partitions_unaffected() {
    let registry: Arc<StdLocked> = Arc::new(RegistryBuilder::new().partitions(4).build().unwrap());
    let key = 11u64;
    let index = registry.partition_for(&key);
    poison_partition_of(&registry, key);

    let healthy = (0u64..)
        .find(|k| registry.partition_for(k) != index)
        .unwrap();

    assert_eq!(registry.insert(healthy, 5).unwrap(), None);
    assert_eq!(registry.get_cloned(&healthy).unwrap(), Some(5));
}

#[test]
fn test_recover_restores_access() {
    let registry: Arc<StdLocked> = Arc::new(RegistryBuilder::new().partitions(2).build().unwrap());
    let key = 3u64;
    let index = registry.partition_for(&key);
    poison_partition_of(&registry, key);

    // The insert made before the panic is kept and was published on unwind
    assert_eq!(registry.size(), 1);

    assert_eq!(registry.recover(index).unwrap(), 1);
    assert!(!registry.is_poisoned(index).unwrap());
    assert_eq!(registry.get_cloned(&key).unwrap(), Some(1));
}

#[test]
fn test_recover_out_of_range() {
    let registry: StdLocked = RegistryBuilder::new().partitions(2).build().unwrap();
    assert_eq!(
        registry.recover(9).unwrap_err(),
        RegistryError::PartitionOutOfRange { index: 9, count: 2 }
    );
}
