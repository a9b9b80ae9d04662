/*!
 * Benchmark Harness
 *
 * Concurrent login simulation against a registry: workers share an
 * injected counter, claim login indices from it, and insert the matching
 * synthetic logins until the run's quota is used up.
 */

mod counter;
mod runner;

pub use counter::LoginCounter;
pub use runner::{run_on, run_threads, simulate_logins, RunReport};
