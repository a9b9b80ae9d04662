/*!
 * Lock-Based Synchronization Primitives
 *
 * Per-partition reader-writer locks behind a common capability trait:
 * - parking_lot RwLock (default, no poisoning)
 * - std RwLock (poisoning surfaced as acquisition failure)
 */

mod rwlock;

// Re-export public API
pub use rwlock::{LockPoisoned, ShardLock};
