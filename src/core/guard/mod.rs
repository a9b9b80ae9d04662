/*!
 * RAII Partition Guards
 *
 * Scoped handles that tie a partition lock's hold time to the handle's
 * lifetime.
 *
 * ## Guard Types
 *
 * - **ExclusiveAccess**: mutable container view under the exclusive lock
 * - **SharedAccess**: read-only container view under the shared lock
 *
 * Read-only enforcement is a property of the type: `SharedAccess` has no
 * `DerefMut`, so mutating container methods do not resolve on it.
 */

mod access;
mod traits;

pub use access::{ExclusiveAccess, SharedAccess};
pub use traits::{AccessMode, PartitionGuard};
