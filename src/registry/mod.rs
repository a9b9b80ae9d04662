/*!
 * Sharded Registry
 *
 * Fixed array of independently locked partitions, each owning a disjoint
 * slice of the key space.
 *
 * # Concurrency
 *
 * - Operations on different partitions never contend
 * - Exclusive access to a partition excludes every other holder
 * - Shared access admits any number of readers and no writer
 * - `size()` takes no lock at all and is only weakly consistent
 */

mod builder;
mod partition;
mod selector;

pub use builder::RegistryBuilder;
pub use selector::{fixed_state, Selector};

use crate::core::{
    Container, ExclusiveAccess, RegistryError, RegistryResult, ShardLock, SharedAccess,
};
use partition::Partition;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Sharded concurrent key-value registry
///
/// # Type Parameters
///
/// - `K`: key, hashed for routing; the container adds its own bounds
///   (`Ord` for `BTreeMap`, `Eq` for `HashMap`)
/// - `V`: value
/// - `C`: per-partition container (default `BTreeMap<K, V>`)
/// - `L`: per-partition lock (default `parking_lot::RwLock<C>`)
/// - `S`: hasher used by the partition selector (default fixed-seed ahash)
///
/// The partition count is fixed at construction and never changes.
///
/// # Example
///
/// ```
/// use shard_registry::Registry;
///
/// let registry: Registry<String, u64> = Registry::new(16)?;
/// let alice = "alice".to_string();
///
/// registry.get_exclusive(&alice)?.insert(alice.clone(), 42);
///
/// let partition = registry.get_shared(&alice)?;
/// assert_eq!(partition.get(&alice), Some(&42));
/// # Ok::<(), shard_registry::RegistryError>(())
/// ```
pub struct Registry<K, V, C = BTreeMap<K, V>, L = RwLock<C>, S = ahash::RandomState> {
    partitions: Box<[Partition<C, L>]>,
    selector: Selector<S>,
    _entries: PhantomData<fn() -> (K, V)>,
}

/// Mutable handle type returned by [`Registry::get_exclusive`]
pub type ExclusiveHandle<'a, K, V, C = BTreeMap<K, V>, L = RwLock<C>> =
    ExclusiveAccess<'a, K, V, C, L>;

/// Read-only handle type returned by [`Registry::get_shared`]
pub type SharedHandle<'a, C, L = RwLock<C>> = SharedAccess<'a, C, L>;

impl<K, V> Registry<K, V>
where
    K: Hash + Ord,
{
    /// Create a registry with `partitions` empty partitions
    ///
    /// Fails with [`RegistryError::InvalidPartitionCount`] when `partitions`
    /// is zero; no registry is constructed in that case.
    pub fn new(partitions: usize) -> RegistryResult<Self> {
        RegistryBuilder::new().partitions(partitions).build()
    }
}

impl<K, V, C, L, S> Registry<K, V, C, L, S>
where
    K: Hash,
    C: Container<K, V>,
    L: ShardLock<C>,
    S: BuildHasher,
{
    pub(crate) fn from_selector(selector: Selector<S>) -> Self {
        let partitions: Box<[Partition<C, L>]> = (0..selector.partitions())
            .map(|_| Partition::empty::<K, V>())
            .collect();

        debug!(partitions = partitions.len(), "Registry constructed");

        Self {
            partitions,
            selector,
            _entries: PhantomData,
        }
    }

    /// Exclusive access to the partition owning `key`
    ///
    /// Blocks until no other thread holds the partition in either mode.
    pub fn get_exclusive(&self, key: &K) -> RegistryResult<ExclusiveAccess<'_, K, V, C, L>> {
        self.get_exclusive_at(self.selector.select(key))
    }

    /// Shared access to the partition owning `key`
    ///
    /// Blocks while a writer holds the partition.
    pub fn get_shared(&self, key: &K) -> RegistryResult<SharedAccess<'_, C, L>> {
        self.get_shared_at(self.selector.select(key))
    }

    /// Exclusive access to a partition by index
    pub fn get_exclusive_at(
        &self,
        index: usize,
    ) -> RegistryResult<ExclusiveAccess<'_, K, V, C, L>> {
        self.partition(index)?.exclusive(index).map_err(|_| {
            warn!(partition = index, "Exclusive acquisition on poisoned partition");
            RegistryError::LockPoisoned { partition: index }
        })
    }

    /// Shared access to a partition by index
    pub fn get_shared_at(&self, index: usize) -> RegistryResult<SharedAccess<'_, C, L>> {
        self.partition(index)?.shared(index).map_err(|_| {
            warn!(partition = index, "Shared acquisition on poisoned partition");
            RegistryError::LockPoisoned { partition: index }
        })
    }

    /// Run `f` against the key's container under exclusive access
    pub fn with_exclusive<F, R>(&self, key: &K, f: F) -> RegistryResult<R>
    where
        F: FnOnce(&mut C) -> R,
    {
        let mut access = self.get_exclusive(key)?;
        Ok(f(&mut *access))
    }

    /// Run `f` against the key's container under shared access
    pub fn with_shared<F, R>(&self, key: &K, f: F) -> RegistryResult<R>
    where
        F: FnOnce(&C) -> R,
    {
        let access = self.get_shared(key)?;
        Ok(f(&*access))
    }

    /// Insert a pair, returning the value it replaced
    pub fn insert(&self, key: K, value: V) -> RegistryResult<Option<V>> {
        let mut access = self.get_exclusive(&key)?;
        Ok(access.insert(key, value))
    }

    /// Remove a key, returning its value
    pub fn remove(&self, key: &K) -> RegistryResult<Option<V>> {
        let mut access = self.get_exclusive(key)?;
        Ok(access.remove(key))
    }

    /// Clone out the value registered for `key`
    pub fn get_cloned(&self, key: &K) -> RegistryResult<Option<V>>
    where
        V: Clone,
    {
        let access = self.get_shared(key)?;
        Ok(access.get(key).cloned())
    }

    pub fn contains_key(&self, key: &K) -> RegistryResult<bool> {
        let access = self.get_shared(key)?;
        Ok(access.contains_key(key))
    }

    /// Approximate number of entries across all partitions
    ///
    /// Sums each partition's published length without taking any partition
    /// lock. A partition publishes its length when an exclusive handle on it
    /// is dropped, so the result may miss handles still held, and partitions
    /// are read at different instants. The total is exact only when no
    /// mutation is in flight.
    pub fn size(&self) -> usize {
        self.partitions.iter().map(Partition::published_len).sum()
    }

    /// Whether `size()` is zero (same weak consistency)
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|p| p.published_len() == 0)
    }

    /// Per-partition published lengths, in partition order (lock-free)
    pub fn partition_sizes(&self) -> Vec<usize> {
        self.partitions.iter().map(Partition::published_len).collect()
    }

    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Index of the partition that owns `key`
    #[inline]
    pub fn partition_for(&self, key: &K) -> usize {
        self.selector.select(key)
    }

    pub fn selector(&self) -> &Selector<S> {
        &self.selector
    }

    /// Whether a partition's lock has been poisoned by a panicking holder
    pub fn is_poisoned(&self, index: usize) -> RegistryResult<bool> {
        Ok(self.partition(index)?.is_poisoned())
    }

    /// Make a poisoned partition usable again
    ///
    /// The container is kept as the panicking holder left it. Returns the
    /// partition's length after recovery.
    pub fn recover(&self, index: usize) -> RegistryResult<usize> {
        let partition = self.partition(index)?;
        let len = partition
            .recover::<K, V>()
            .map_err(|_| RegistryError::LockPoisoned { partition: index })?;
        debug!(partition = index, len, "Partition recovered");
        Ok(len)
    }

    #[inline]
    fn partition(&self, index: usize) -> RegistryResult<&Partition<C, L>> {
        self.partitions
            .get(index)
            .ok_or(RegistryError::PartitionOutOfRange {
                index,
                count: self.partitions.len(),
            })
    }
}

impl<K, V, C, L, S> fmt::Debug for Registry<K, V, C, L, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("partitions", &self.partitions.len())
            .finish_non_exhaustive()
    }
}
