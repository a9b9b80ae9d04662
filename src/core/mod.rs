/*!
 * Core Module
 * Error handling, capability traits, locks and scoped guards
 */

pub mod errors;
pub mod guard;
pub mod shard_manager;
pub mod sync;
pub mod traits;

// Re-export for convenience
pub use errors::*;
pub use guard::{AccessMode, ExclusiveAccess, PartitionGuard, SharedAccess};
pub use shard_manager::{ShardManager, WorkloadProfile};
pub use sync::{LockPoisoned, ShardLock};
pub use traits::Container;
