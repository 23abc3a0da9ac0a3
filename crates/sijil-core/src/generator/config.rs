//! Generator configuration.

use serde::{Deserialize, Serialize};

use super::pools::NamePools;
use super::GeneratorResult;

/// Default population target, matching the registry demo dataset.
pub const DEFAULT_TARGET_SIZE: usize = 300;

/// Configuration for one population generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Exact number of patients to produce. Families are generated until the
    /// running total reaches this, then the list is truncated to it.
    pub target_size: usize,
    /// Seed for the random source. `None` draws from OS entropy, which makes
    /// the output non-reproducible.
    pub seed: Option<u64>,
    /// Name and place pools to draw from.
    pub pools: NamePools,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            seed: None,
            pools: NamePools::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a seeded configuration with the default pools and target size.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check the configuration for fatal errors (empty pools).
    pub fn validate(&self) -> GeneratorResult<()> {
        self.pools.validate()
    }
}
