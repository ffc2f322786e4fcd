use serde::{Deserialize, Serialize};

use crate::policy::CoveragePolicy;

/// YAML-configurable parameters governing a draw.
///
/// Every field carries a default, so an empty document is a valid
/// configuration (a full-coverage batch of 20 with one extra pick).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Total number of questions in the batch.
    #[serde(default = "default_batch")]
    pub batch: usize,
    /// Coverage policy applied by the kernel.
    #[serde(default)]
    pub policy: CoveragePolicy,
    /// Rejection-sampling attempt budget per batch slot. The kernel aborts
    /// with an exhausted-space error once `batch * attempts_per_pick`
    /// candidates have been proposed without filling the batch.
    #[serde(default = "default_attempts_per_pick")]
    pub attempts_per_pick: usize,
    /// Master seed policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_batch() -> usize {
    20
}

fn default_attempts_per_pick() -> usize {
    4096
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            batch: default_batch(),
            policy: CoveragePolicy::default(),
            attempts_per_pick: default_attempts_per_pick(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedPolicy {
    /// Master seed for the run. `None` means the caller draws a fresh seed
    /// from the operating system entropy source before invoking the kernel.
    #[serde(default)]
    pub master_seed: Option<u64>,
    /// Optional label recorded alongside the seed in summaries.
    #[serde(default)]
    pub label: Option<String>,
}
