/*!
 * Partition Count Selection
 *
 * CPU-topology-aware default partition counts for registries that are not
 * given an explicit count.
 *
 * # Design Rationale
 *
 * - **Power-of-2 counts**: keys spread evenly under modulo reduction
 * - **CPU-proportional scaling**: more cores means more concurrent writers
 * - **Clamped**: at least 8 partitions, at most 512
 */

/// Largest partition count picked automatically (also the login workload's count)
pub const MAX_AUTO_PARTITIONS: usize = 512;

/// Smallest partition count picked automatically
pub const MIN_AUTO_PARTITIONS: usize = 8;

/// Hardware-aware partition count selection (pure functions)
pub struct ShardManager;

impl ShardManager {
    /// Number of CPUs available to this process
    #[inline]
    pub fn cpu_count() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or_else(|_| {
                tracing::warn!("Failed to detect CPU count, defaulting to 8");
                8
            })
    }

    /// Partition count for the expected write contention
    #[inline]
    pub fn partitions(profile: WorkloadProfile) -> usize {
        Self::partitions_for(Self::cpu_count(), profile)
    }

    /// Partition count for an explicit CPU count
    pub fn partitions_for(cpus: usize, profile: WorkloadProfile) -> usize {
        let multiplier = match profile {
            WorkloadProfile::HighContention => 16,
            WorkloadProfile::MediumContention => 4,
            WorkloadProfile::LowContention => 1,
        };

        cpus.max(1)
            .saturating_mul(multiplier)
            .next_power_of_two()
            .clamp(MIN_AUTO_PARTITIONS, MAX_AUTO_PARTITIONS)
    }
}

/// Expected write contention on a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkloadProfile {
    /// Many threads inserting continuously (login storms)
    /// Partition count: 16x CPU cores
    HighContention,

    /// Mixed reads and writes
    /// Partition count: 4x CPU cores
    #[default]
    MediumContention,

    /// Mostly reads, occasional inserts
    /// Partition count: 1x CPU cores
    LowContention,
}
