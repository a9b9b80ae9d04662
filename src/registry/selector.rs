/*!
 * Partition Selector
 * Deterministic key -> partition routing
 */

use crate::core::{RegistryError, RegistryResult};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::num::NonZeroUsize;

const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hasher state with fixed seeds
///
/// Every selector built from it routes a given key to the same partition,
/// across registries and across runs of the same binary.
#[inline]
pub fn fixed_state() -> ahash::RandomState {
    ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3])
}

/// Maps keys to partition indices in `[0, partitions)`
///
/// Selection is `hash(key) % partitions`, a pure function of the key, the
/// hasher and the partition count.
#[derive(Clone)]
pub struct Selector<S = ahash::RandomState> {
    hasher: S,
    partitions: NonZeroUsize,
}

impl Selector {
    /// Selector using the fixed-seed ahash state
    pub fn new(partitions: usize) -> RegistryResult<Self> {
        Self::with_hasher(partitions, fixed_state())
    }
}

impl<S: BuildHasher> Selector<S> {
    /// Selector using a caller-supplied hasher
    ///
    /// The hasher must be deterministic: two hashers built from it have to
    /// agree on every key, otherwise routing is undefined.
    pub fn with_hasher(partitions: usize, hasher: S) -> RegistryResult<Self> {
        let partitions =
            NonZeroUsize::new(partitions).ok_or(RegistryError::InvalidPartitionCount(partitions))?;
        Ok(Self { hasher, partitions })
    }

    /// Full 64-bit hash of a key
    #[inline]
    pub fn hash<K: Hash + ?Sized>(&self, key: &K) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Partition index for a key
    #[inline]
    pub fn select<K: Hash + ?Sized>(&self, key: &K) -> usize {
        (self.hash(key) % self.partitions.get() as u64) as usize
    }

    #[inline]
    pub fn partitions(&self) -> usize {
        self.partitions.get()
    }
}

impl<S> fmt::Debug for Selector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("partitions", &self.partitions)
            .finish_non_exhaustive()
    }
}
