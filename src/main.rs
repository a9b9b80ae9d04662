/*!
 * Shard Registry - Login Benchmark
 *
 * Simulates concurrent logins into a sharded registry once per configured
 * worker count and reports the wall-clock time of each run.
 */

use miette::{IntoDiagnostic, Result};
use shard_registry::{init_tracing, run_threads, HarnessConfig};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = HarnessConfig::from_env()?;
    info!(
        threads = ?config.thread_counts,
        logins = config.logins,
        partitions = config.registry.partitions,
        "Shard registry benchmark starting"
    );

    for &threads in &config.thread_counts {
        println!("Running with {} threads", threads);
        let report = run_threads(threads, config.logins, &config.registry)?;

        if config.json_report {
            println!("{}", serde_json::to_string(&report).into_diagnostic()?);
        } else {
            println!("{}", report);
        }
    }

    Ok(())
}
