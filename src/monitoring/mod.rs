/*!
 * Monitoring
 * Tracing setup and partition load metrics
 */

mod metrics;
mod tracer;

pub use metrics::PartitionStats;
pub use tracer::{init_tracing, TRACE_JSON_VAR};
