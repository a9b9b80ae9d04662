/*!
 * Configuration
 *
 * Registry sizing and harness settings
 *
 * Environment variables:
 * - REGISTRY_THREADS: comma-separated worker counts to run (default: 1,4)
 * - REGISTRY_LOGINS: logins per run (default: 8388608)
 * - REGISTRY_PARTITIONS: partitions per registry (default: 512)
 * - REGISTRY_REPORT_JSON: print run reports as JSON (default: false)
 */

use crate::core::{ConfigError, ConfigResult, ShardManager, WorkloadProfile};
use crate::core::shard_manager::MAX_AUTO_PARTITIONS;

pub const THREADS_VAR: &str = "REGISTRY_THREADS";
pub const LOGINS_VAR: &str = "REGISTRY_LOGINS";
pub const PARTITIONS_VAR: &str = "REGISTRY_PARTITIONS";
pub const REPORT_JSON_VAR: &str = "REGISTRY_REPORT_JSON";

/// Logins per run when nothing is configured
pub const DEFAULT_LOGINS: usize = 8 * 1024 * 1024;

/// Registry sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of partitions (must be greater than zero)
    pub partitions: usize,
}

impl RegistryConfig {
    pub const fn with_partitions(partitions: usize) -> Self {
        Self { partitions }
    }

    /// Sizing for an expected contention level on this machine
    pub fn for_profile(profile: WorkloadProfile) -> Self {
        Self {
            partitions: ShardManager::partitions(profile),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::for_profile(WorkloadProfile::default())
    }
}

/// Benchmark harness settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Worker counts, one run per entry
    pub thread_counts: Vec<usize>,
    /// Logins simulated per run
    pub logins: usize,
    /// Registry sizing for every run
    pub registry: RegistryConfig,
    /// Emit reports as JSON instead of text
    pub json_report: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            thread_counts: vec![1, 4],
            logins: DEFAULT_LOGINS,
            registry: RegistryConfig::with_partitions(MAX_AUTO_PARTITIONS),
            json_report: false,
        }
    }
}

impl HarnessConfig {
    /// Load from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(THREADS_VAR) {
            config.thread_counts = raw
                .split(',')
                .map(|part| parse_positive(THREADS_VAR, part))
                .collect::<ConfigResult<_>>()?;
        }

        if let Some(raw) = lookup(LOGINS_VAR) {
            config.logins = raw
                .trim()
                .parse()
                .map_err(|_| invalid(LOGINS_VAR, &raw))?;
        }

        if let Some(raw) = lookup(PARTITIONS_VAR) {
            config.registry.partitions = parse_positive(PARTITIONS_VAR, &raw)?;
        }

        if let Some(raw) = lookup(REPORT_JSON_VAR) {
            config.json_report = matches!(raw.trim(), "1" | "true");
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, raw: &str) -> ConfigResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(invalid(var, raw)),
    }
}

fn invalid(var: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    }
}
