/*!
 * Contention Detector
 *
 * ShardLock wrapper that counts holders per mode and records any moment
 * where exclusivity is broken
 */

use shard_registry::{LockPoisoned, ShardLock};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Violations seen by every DetectingLock in this test binary
pub static VIOLATIONS: AtomicUsize = AtomicUsize::new(0);

/// Exclusive acquisitions seen by every DetectingLock in this test binary
pub static EXCLUSIVE_ACQUISITIONS: AtomicUsize = AtomicUsize::new(0);

pub struct DetectingLock<T> {
    inner: parking_lot::RwLock<T>,
    readers: AtomicUsize,
    writers: AtomicUsize,
}

pub struct DetectedRead<'a, T> {
    guard: parking_lot::RwLockReadGuard<'a, T>,
    lock: &'a DetectingLock<T>,
}

pub struct DetectedWrite<'a, T> {
    guard: parking_lot::RwLockWriteGuard<'a, T>,
    lock: &'a DetectingLock<T>,
}

impl<T> ShardLock<T> for DetectingLock<T> {
    type ReadGuard<'a> = DetectedRead<'a, T> where Self: 'a;
    type WriteGuard<'a> = DetectedWrite<'a, T> where Self: 'a;

    fn new(value: T) -> Self {
        Self {
            inner: parking_lot::RwLock::new(value),
            readers: AtomicUsize::new(0),
            writers: AtomicUsize::new(0),
        }
    }

    fn read(&self) -> Result<DetectedRead<'_, T>, LockPoisoned> {
        let guard = self.inner.read();
        self.readers.fetch_add(1, Ordering::SeqCst);
        if self.writers.load(Ordering::SeqCst) != 0 {
            VIOLATIONS.fetch_add(1, Ordering::SeqCst);
        }
        Ok(DetectedRead { guard, lock: self })
    }

    fn write(&self) -> Result<DetectedWrite<'_, T>, LockPoisoned> {
        let guard = self.inner.write();
        EXCLUSIVE_ACQUISITIONS.fetch_add(1, Ordering::SeqCst);
        let writers_before = self.writers.fetch_add(1, Ordering::SeqCst);
        if writers_before != 0 || self.readers.load(Ordering::SeqCst) != 0 {
            VIOLATIONS.fetch_add(1, Ordering::SeqCst);
        }
        Ok(DetectedWrite { guard, lock: self })
    }
}

impl<T> Deref for DetectedRead<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> Drop for DetectedRead<'_, T> {
    fn drop(&mut self) {
        // Runs before the inner guard releases the lock
        self.lock.readers.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T> Deref for DetectedWrite<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for DetectedWrite<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T> Drop for DetectedWrite<'_, T> {
    fn drop(&mut self) {
        self.lock.writers.fetch_sub(1, Ordering::SeqCst);
    }
}
