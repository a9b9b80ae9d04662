/*!
 * Partition Access Guards
 *
 * Scoped handles binding a partition's container to a held lock
 */

use super::traits::{AccessMode, PartitionGuard};
use crate::core::sync::ShardLock;
use crate::core::traits::Container;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mutable view of one partition, held under its exclusive lock
///
/// Derefs to the container itself, so container methods are called
/// directly on the handle. On drop the container length is published to the
/// partition's size counter, then the lock is released. Both happen on every
/// exit path, unwinding included.
///
/// # Example
///
/// ```
/// use shard_registry::Registry;
///
/// let registry: Registry<&str, u32> = Registry::new(4).unwrap();
/// {
///     let mut partition = registry.get_exclusive(&"alice").unwrap();
///     partition.insert("alice", 7);
/// } // lock released here
/// assert_eq!(registry.size(), 1);
/// ```
pub struct ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    guard: L::WriteGuard<'a>,
    published_len: &'a AtomicUsize,
    partition: usize,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<'a, K, V, C, L> ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    #[inline]
    pub(crate) fn new(
        guard: L::WriteGuard<'a>,
        published_len: &'a AtomicUsize,
        partition: usize,
    ) -> Self {
        Self {
            guard,
            published_len,
            partition,
            _entries: PhantomData,
        }
    }
}

impl<'a, K, V, C, L> Deref for ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        self.guard.deref()
    }
}

impl<'a, K, V, C, L> DerefMut for ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        self.guard.deref_mut()
    }
}

impl<'a, K, V, C, L> PartitionGuard for ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    #[inline]
    fn partition(&self) -> usize {
        self.partition
    }

    #[inline]
    fn mode(&self) -> AccessMode {
        AccessMode::Exclusive
    }
}

impl<'a, K, V, C, L> Drop for ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    fn drop(&mut self) {
        // Publish while still holding the lock; the guard field drops after this.
        let len = self.guard.deref().len();
        self.published_len.store(len, Ordering::Release);
    }
}

impl<'a, K, V, C, L> fmt::Debug for ExclusiveAccess<'a, K, V, C, L>
where
    C: Container<K, V>,
    L: ShardLock<C> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusiveAccess")
            .field("partition", &self.partition)
            .field("len", &self.guard.deref().len())
            .finish()
    }
}

/// Read-only view of one partition, held under its shared lock
///
/// Only `Deref` is implemented, so mutating container methods are not
/// reachable through this handle:
///
/// ```compile_fail
/// use shard_registry::Registry;
///
/// let registry: Registry<&str, u32> = Registry::new(4).unwrap();
/// let mut partition = registry.get_shared(&"alice").unwrap();
/// partition.insert("alice", 7);
/// ```
pub struct SharedAccess<'a, C, L>
where
    L: ShardLock<C> + 'a,
{
    guard: L::ReadGuard<'a>,
    partition: usize,
}

impl<'a, C, L> SharedAccess<'a, C, L>
where
    L: ShardLock<C> + 'a,
{
    #[inline]
    pub(crate) fn new(guard: L::ReadGuard<'a>, partition: usize) -> Self {
        Self { guard, partition }
    }
}

impl<'a, C, L> Deref for SharedAccess<'a, C, L>
where
    L: ShardLock<C> + 'a,
{
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        self.guard.deref()
    }
}

impl<'a, C, L> PartitionGuard for SharedAccess<'a, C, L>
where
    L: ShardLock<C> + 'a,
{
    #[inline]
    fn partition(&self) -> usize {
        self.partition
    }

    #[inline]
    fn mode(&self) -> AccessMode {
        AccessMode::Shared
    }
}

impl<'a, C, L> fmt::Debug for SharedAccess<'a, C, L>
where
    L: ShardLock<C> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAccess")
            .field("partition", &self.partition)
            .finish_non_exhaustive()
    }
}
