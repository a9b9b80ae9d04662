/*!
 * Partition Metrics
 * Load-balance summary over per-partition entry counts
 */

use serde::{Deserialize, Serialize};

/// Distribution of entries across a registry's partitions
///
/// Built from `Registry::partition_sizes`, so it carries the same weak
/// consistency as `Registry::size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionStats {
    pub partitions: usize,
    pub total: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Largest partition relative to the mean (1.0 is perfectly even)
    pub imbalance: f64,
    pub empty_partitions: usize,
}

impl PartitionStats {
    pub fn from_sizes(sizes: &[usize]) -> Self {
        let partitions = sizes.len();
        let total: usize = sizes.iter().sum();
        let min = sizes.iter().copied().min().unwrap_or(0);
        let max = sizes.iter().copied().max().unwrap_or(0);

        let mean = if partitions == 0 {
            0.0
        } else {
            total as f64 / partitions as f64
        };
        let imbalance = if mean > 0.0 { max as f64 / mean } else { 0.0 };

        Self {
            partitions,
            total,
            min,
            max,
            mean,
            imbalance,
            empty_partitions: sizes.iter().filter(|&&n| n == 0).count(),
        }
    }
}
