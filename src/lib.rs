/*!
 * Shard Registry Library
 *
 * Sharded concurrent key-value registry: a fixed array of independently
 * locked partitions, with scoped handles that hold a partition lock for
 * exactly as long as they live.
 */

pub mod config;
pub mod core;
pub mod harness;
pub mod monitoring;
pub mod registry;
pub mod workload;

// Re-exports
pub use config::{HarnessConfig, RegistryConfig};
pub use crate::core::{
    AccessMode, ConfigError, Container, ExclusiveAccess, HarnessError, LockPoisoned,
    PartitionGuard, RegistryError, RegistryResult, ShardLock, ShardManager, SharedAccess,
    WorkloadProfile,
};
pub use harness::{run_threads, LoginCounter, RunReport};
pub use monitoring::{init_tracing, PartitionStats};
pub use registry::{
    fixed_state, ExclusiveHandle, Registry, RegistryBuilder, Selector, SharedHandle,
};
pub use workload::{fake_login, IpAddress, UserId};
