/*!
 * Registry Builder
 * Builder pattern for Registry construction
 */

use super::selector::{fixed_state, Selector};
use super::Registry;
use crate::config::RegistryConfig;
use crate::core::{Container, RegistryResult, ShardLock};
use std::hash::{BuildHasher, Hash};

/// Builder for Registry
///
/// Container and lock types are picked by the type of the registry being
/// built, so one builder serves every flavour:
///
/// ```
/// use shard_registry::{Registry, RegistryBuilder};
/// use std::collections::HashMap;
///
/// let registry: Registry<u32, u32, HashMap<u32, u32>, std::sync::RwLock<HashMap<u32, u32>>> =
///     RegistryBuilder::new().partitions(32).build()?;
/// assert_eq!(registry.partition_count(), 32);
/// # Ok::<(), shard_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder<S = ahash::RandomState> {
    partitions: usize,
    hasher: S,
}

impl RegistryBuilder {
    /// Builder with the default partition count and the fixed-seed hasher
    pub fn new() -> Self {
        Self {
            partitions: RegistryConfig::default().partitions,
            hasher: fixed_state(),
        }
    }

    /// Builder seeded from a configuration
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new().partitions(config.partitions)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RegistryBuilder<S> {
    /// Set the partition count (must be greater than zero)
    pub fn partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Route keys with a different hasher
    pub fn hasher<T: BuildHasher>(self, hasher: T) -> RegistryBuilder<T> {
        RegistryBuilder {
            partitions: self.partitions,
            hasher,
        }
    }

    /// Build the registry
    ///
    /// Fails when the partition count is zero, before anything is allocated.
    pub fn build<K, V, C, L>(self) -> RegistryResult<Registry<K, V, C, L, S>>
    where
        K: Hash,
        C: Container<K, V>,
        L: ShardLock<C>,
        S: BuildHasher,
    {
        let selector = Selector::with_hasher(self.partitions, self.hasher)?;
        Ok(Registry::from_selector(selector))
    }
}
