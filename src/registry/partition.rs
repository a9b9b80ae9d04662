/*!
 * Registry Partition
 * One (container, lock) pair: the unit of concurrency
 */

use crate::core::{Container, ExclusiveAccess, LockPoisoned, ShardLock, SharedAccess};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A lock-protected container plus its published length
///
/// `published_len` is written only by a dropping `ExclusiveAccess` (or by
/// recovery) and read without the lock by `Registry::size`. Aligned to a
/// cache line so neighbouring partitions' locks do not false-share.
#[repr(align(64))]
pub(crate) struct Partition<C, L> {
    lock: L,
    published_len: AtomicUsize,
    _container: PhantomData<fn() -> C>,
}

impl<C, L> Partition<C, L>
where
    L: ShardLock<C>,
{
    pub(crate) fn empty<K, V>() -> Self
    where
        C: Container<K, V>,
    {
        Self {
            lock: L::new(C::new_empty()),
            published_len: AtomicUsize::new(0),
            _container: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn exclusive<K, V>(
        &self,
        index: usize,
    ) -> Result<ExclusiveAccess<'_, K, V, C, L>, LockPoisoned>
    where
        C: Container<K, V>,
    {
        let guard = self.lock.write()?;
        Ok(ExclusiveAccess::new(guard, &self.published_len, index))
    }

    #[inline]
    pub(crate) fn shared(&self, index: usize) -> Result<SharedAccess<'_, C, L>, LockPoisoned> {
        let guard = self.lock.read()?;
        Ok(SharedAccess::new(guard, index))
    }

    /// Last published length; takes no lock
    #[inline]
    pub(crate) fn published_len(&self) -> usize {
        self.published_len.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn is_poisoned(&self) -> bool {
        self.lock.is_poisoned()
    }

    /// Clear poisoning and re-publish the container length
    pub(crate) fn recover<K, V>(&self) -> Result<usize, LockPoisoned>
    where
        C: Container<K, V>,
    {
        self.lock.clear_poison();
        let guard = self.lock.read()?;
        let len = Container::len(&*guard);
        self.published_len.store(len, Ordering::Release);
        Ok(len)
    }
}
