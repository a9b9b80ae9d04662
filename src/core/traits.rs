/*!
 * Core Traits
 * Container capability stored inside each partition
 */

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Key-value container held by a single partition
///
/// The registry never touches a container except through a scoped handle,
/// so implementations need no internal synchronization.
pub trait Container<K, V> {
    /// Create an empty container for a fresh partition
    fn new_empty() -> Self
    where
        Self: Sized;

    /// Insert a pair, returning the previous value for the key
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Look up the value registered for a key
    fn get(&self, key: &K) -> Option<&V>;

    /// Remove a key, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of entries
    fn len(&self) -> usize;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Ord, V> Container<K, V> for BTreeMap<K, V> {
    #[inline]
    fn new_empty() -> Self {
        BTreeMap::new()
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl<K, V, S> Container<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    #[inline]
    fn new_empty() -> Self {
        HashMap::with_hasher(S::default())
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
}
