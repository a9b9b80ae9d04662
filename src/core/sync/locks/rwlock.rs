/*!
 * Reader-Writer Lock Capability
 * Abstracts the per-partition lock so the registry can run on any RwLock flavour
 */

use std::ops::{Deref, DerefMut};

/// Lock left unusable by a holder that panicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("lock poisoned by a panicking holder")]
pub struct LockPoisoned;

/// Reader-writer lock guarding one partition's container
///
/// Acquisition blocks until the requested mode is grantable. Dropping the
/// returned guard releases the lock. There is no upgrade path from a read
/// guard to a write guard.
///
/// # Implementations
///
/// - `parking_lot::RwLock`: never poisons, eventually fair hand-off between
///   readers and writers
/// - `std::sync::RwLock`: poisons when a writer panics, which the registry
///   reports as an acquisition failure
pub trait ShardLock<T> {
    /// Shared-mode guard
    type ReadGuard<'a>: Deref<Target = T>
    where
        Self: 'a;

    /// Exclusive-mode guard
    type WriteGuard<'a>: DerefMut<Target = T>
    where
        Self: 'a;

    /// Wrap a value in a new, unlocked lock
    fn new(value: T) -> Self
    where
        Self: Sized;

    /// Block until shared access is granted
    fn read(&self) -> Result<Self::ReadGuard<'_>, LockPoisoned>;

    /// Block until exclusive access is granted
    fn write(&self) -> Result<Self::WriteGuard<'_>, LockPoisoned>;

    fn is_poisoned(&self) -> bool {
        false
    }

    /// Make a poisoned lock usable again
    fn clear_poison(&self) {}
}

impl<T> ShardLock<T> for parking_lot::RwLock<T> {
    type ReadGuard<'a> = parking_lot::RwLockReadGuard<'a, T> where Self: 'a;
    type WriteGuard<'a> = parking_lot::RwLockWriteGuard<'a, T> where Self: 'a;

    #[inline]
    fn new(value: T) -> Self {
        parking_lot::RwLock::new(value)
    }

    #[inline]
    fn read(&self) -> Result<Self::ReadGuard<'_>, LockPoisoned> {
        Ok(parking_lot::RwLock::read(self))
    }

    #[inline]
    fn write(&self) -> Result<Self::WriteGuard<'_>, LockPoisoned> {
        Ok(parking_lot::RwLock::write(self))
    }
}

impl<T> ShardLock<T> for std::sync::RwLock<T> {
    type ReadGuard<'a> = std::sync::RwLockReadGuard<'a, T> where Self: 'a;
    type WriteGuard<'a> = std::sync::RwLockWriteGuard<'a, T> where Self: 'a;

    #[inline]
    fn new(value: T) -> Self {
        std::sync::RwLock::new(value)
    }

    #[inline]
    fn read(&self) -> Result<Self::ReadGuard<'_>, LockPoisoned> {
        std::sync::RwLock::read(self).map_err(|_| LockPoisoned)
    }

    #[inline]
    fn write(&self) -> Result<Self::WriteGuard<'_>, LockPoisoned> {
        std::sync::RwLock::write(self).map_err(|_| LockPoisoned)
    }

    fn is_poisoned(&self) -> bool {
        std::sync::RwLock::is_poisoned(self)
    }

    fn clear_poison(&self) {
        std::sync::RwLock::clear_poison(self)
    }
}
