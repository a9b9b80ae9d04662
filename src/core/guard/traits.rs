/*!
 * Guard Traits
 *
 * Core abstractions for scoped partition guards
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lock mode a guard was acquired in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Single holder, no concurrent readers or writers
    Exclusive,
    /// Any number of readers, no writer
    Shared,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Exclusive => f.write_str("exclusive"),
            AccessMode::Shared => f.write_str("shared"),
        }
    }
}

/// Guard over a single registry partition
///
/// The lock is held for exactly the lifetime of the implementing value.
pub trait PartitionGuard {
    /// Index of the guarded partition
    fn partition(&self) -> usize;

    /// Mode the lock is held in
    fn mode(&self) -> AccessMode;

    fn is_exclusive(&self) -> bool {
        self.mode() == AccessMode::Exclusive
    }
}
