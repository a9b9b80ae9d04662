/*!
 * Login Benchmark Runner
 * Drives concurrent inserts into a registry and times them
 */

use super::counter::LoginCounter;
use crate::config::RegistryConfig;
use crate::core::{Container, HarnessError, HarnessResult, RegistryResult, ShardLock};
use crate::monitoring::PartitionStats;
use crate::registry::{Registry, RegistryBuilder};
use crate::workload::{fake_login, IpAddress, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::BuildHasher;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Outcome of one timed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub threads: usize,
    pub logins: usize,
    pub partitions: usize,
    pub elapsed_ms: f64,
    /// `size()` after every worker joined
    pub registered: usize,
    /// Logins inserted by each worker, in spawn order
    pub per_worker: Vec<usize>,
    pub distribution: PartitionStats,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Time taken for {} logins with {} threads: {:.0}ms",
            self.logins, self.threads, self.elapsed_ms
        )?;
        write!(f, "Total items in registry: {}", self.registered)
    }
}

/// Insert logins until the counter passes `logins`
///
/// Each claimed index is turned into a synthetic login and inserted under
/// exclusive access to its partition. Returns how many logins this worker
/// inserted.
pub fn simulate_logins<C, L, S>(
    registry: &Registry<UserId, IpAddress, C, L, S>,
    counter: &LoginCounter,
    logins: usize,
) -> RegistryResult<usize>
where
    C: Container<UserId, IpAddress>,
    L: ShardLock<C>,
    S: BuildHasher,
{
    let mut inserted = 0;

    loop {
        let index = counter.claim();
        if index > logins {
            break;
        }

        let (user, address) = fake_login(index as u64);
        let mut partition = registry.get_exclusive(&user)?;
        partition.insert(user, address);
        inserted += 1;
    }

    Ok(inserted)
}

/// Run `threads` workers against a fresh registry
#[instrument(skip(registry_config), fields(partitions = registry_config.partitions))]
pub fn run_threads(
    threads: usize,
    logins: usize,
    registry_config: &RegistryConfig,
) -> HarnessResult<RunReport> {
    let registry: Registry<UserId, IpAddress> =
        RegistryBuilder::from_config(registry_config).build()?;
    let counter = LoginCounter::new();
    run_on(&registry, &counter, threads, logins)
}

/// Run `threads` workers against an existing registry and counter
///
/// Both are owned by the caller; workers only borrow them for the run.
pub fn run_on<C, L, S>(
    registry: &Registry<UserId, IpAddress, C, L, S>,
    counter: &LoginCounter,
    threads: usize,
    logins: usize,
) -> HarnessResult<RunReport>
where
    C: Container<UserId, IpAddress>,
    L: ShardLock<C> + Sync,
    S: BuildHasher + Sync,
{
    if threads == 0 {
        return Err(HarnessError::NoWorkers);
    }

    info!(threads, logins, "Running login simulation");
    let start = Instant::now();

    let per_worker = thread::scope(|scope| -> HarnessResult<Vec<usize>> {
        let mut workers = Vec::with_capacity(threads);
        for worker in 0..threads {
            let handle = thread::Builder::new()
                .name(format!("login-worker-{}", worker))
                .spawn_scoped(scope, move || simulate_logins(registry, counter, logins))?;
            workers.push(handle);
        }

        workers
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| match handle.join() {
                Ok(result) => result.map_err(HarnessError::from),
                Err(_) => Err(HarnessError::WorkerPanicked(worker)),
            })
            .collect()
    })?;

    let elapsed = start.elapsed();
    let report = RunReport {
        threads,
        logins,
        partitions: registry.partition_count(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        registered: registry.size(),
        per_worker,
        distribution: PartitionStats::from_sizes(&registry.partition_sizes()),
    };

    debug!(per_worker = ?report.per_worker, "Workers joined");
    info!(
        elapsed_ms = report.elapsed_ms,
        registered = report.registered,
        imbalance = report.distribution.imbalance,
        "Login simulation complete"
    );

    Ok(report)
}
