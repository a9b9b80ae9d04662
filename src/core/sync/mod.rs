/*!
 * Synchronization Primitives
 *
 * Lock capabilities used by registry partitions. Each partition owns one
 * lock instance; there is no global lock.
 */

pub mod locks;

pub use locks::{LockPoisoned, ShardLock};
