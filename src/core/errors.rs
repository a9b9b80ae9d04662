/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RegistryError {
    #[error("Invalid partition count: {0}")]
    #[diagnostic(
        code(registry::invalid_partition_count),
        help("A registry needs at least one partition. Pass a partition count greater than zero.")
    )]
    InvalidPartitionCount(usize),

    #[error("Partition {partition} lock is poisoned")]
    #[diagnostic(
        code(registry::lock_poisoned),
        help("A thread panicked while holding exclusive access. Call `recover` once the partition contents are known to be valid.")
    )]
    LockPoisoned { partition: usize },

    #[error("Partition index {index} out of range (registry has {count} partitions)")]
    #[diagnostic(
        code(registry::partition_out_of_range),
        help("Partition indices run from 0 to partition_count() - 1.")
    )]
    PartitionOutOfRange { index: usize, count: usize },
}

/// Configuration errors raised while reading harness settings
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the environment variable. Counts must be positive integers.")
    )]
    InvalidValue { var: &'static str, value: String },

    #[error("Registry error: {0}")]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),
}

/// Benchmark harness errors
#[derive(Error, Debug, Diagnostic)]
pub enum HarnessError {
    #[error("A run needs at least one worker thread")]
    #[diagnostic(
        code(harness::no_workers),
        help("Set REGISTRY_THREADS to a list of positive counts.")
    )]
    NoWorkers,

    #[error("Failed to spawn worker thread: {0}")]
    #[diagnostic(
        code(harness::spawn_failed),
        help("The system may be out of threads or memory.")
    )]
    Spawn(#[from] std::io::Error),

    #[error("Worker {0} panicked")]
    #[diagnostic(code(harness::worker_panicked))]
    WorkerPanicked(usize),

    #[error("Registry error: {0}")]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),
}

/// Common result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for harness runs
pub type HarnessResult<T> = Result<T, HarnessError>;
