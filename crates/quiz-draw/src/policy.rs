use serde::{Deserialize, Serialize};

use quiz_core::errors::ErrorInfo;
use quiz_core::{PartitionId, PartitionMap, QuizError};

/// Coverage policies supported by the draw kernel.
///
/// A policy names the partitions that must each contribute exactly one pick
/// before the batch is topped up with `extras` additional picks, and it
/// selects the drawing strategy the kernel uses to get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CoveragePolicy {
    /// Every partition of the table is mandatory. Picks are found by
    /// bounded rejection sampling over the whole ID space; the extra picks
    /// at the end of the batch are unconstrained by partition.
    FullCoverage {
        /// Number of unconstrained picks after the coverage slots.
        #[serde(default = "default_full_extras")]
        extras: usize,
    },
    /// A fixed subset of partitions is mandatory. Each is visited once in
    /// randomized order and drawn from directly; the extra picks then come
    /// from distinct still-eligible partitions of the same subset.
    SubsetCoverage {
        /// Raw identifiers of the mandatory partitions.
        partitions: Vec<u32>,
        /// Number of diversified extension picks after the coverage slots.
        #[serde(default = "default_subset_extras")]
        extras: usize,
    },
}

fn default_full_extras() -> usize {
    1
}

fn default_subset_extras() -> usize {
    3
}

impl Default for CoveragePolicy {
    fn default() -> Self {
        CoveragePolicy::FullCoverage {
            extras: default_full_extras(),
        }
    }
}

impl CoveragePolicy {
    /// Number of extra picks the policy appends after the coverage slots.
    pub fn extras(&self) -> usize {
        match self {
            CoveragePolicy::FullCoverage { extras } => *extras,
            CoveragePolicy::SubsetCoverage { extras, .. } => *extras,
        }
    }

    /// Resolves the mandatory partitions against the table, in ascending
    /// identifier order.
    ///
    /// Subset policies must name declared partitions and must not name one
    /// twice; the full-coverage policy makes every partition mandatory.
    pub fn mandatory(&self, map: &PartitionMap) -> Result<Vec<PartitionId>, QuizError> {
        match self {
            CoveragePolicy::FullCoverage { .. } => Ok(map.partitions().collect()),
            CoveragePolicy::SubsetCoverage { partitions, .. } => {
                let mut mandatory = Vec::with_capacity(partitions.len());
                for raw in partitions {
                    let partition = PartitionId::from_raw(*raw);
                    map.span(partition).map_err(|_| {
                        QuizError::Config(
                            ErrorInfo::new(
                                "unknown-mandatory-partition",
                                "subset policy names a partition missing from the table",
                            )
                            .with_context("partition", raw.to_string()),
                        )
                    })?;
                    if mandatory.contains(&partition) {
                        return Err(QuizError::Config(
                            ErrorInfo::new(
                                "duplicate-mandatory-partition",
                                "subset policy names a partition twice",
                            )
                            .with_context("partition", raw.to_string()),
                        ));
                    }
                    mandatory.push(partition);
                }
                if mandatory.is_empty() {
                    return Err(QuizError::Config(ErrorInfo::new(
                        "empty-subset",
                        "subset policy names no mandatory partitions",
                    )));
                }
                mandatory.sort();
                Ok(mandatory)
            }
        }
    }
}
