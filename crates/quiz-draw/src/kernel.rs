use std::collections::BTreeSet;

use quiz_core::errors::ErrorInfo;
use quiz_core::{PartitionId, PartitionMap, QuizError, RngHandle};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DrawConfig;
use crate::determinism;
use crate::policy::CoveragePolicy;
use crate::pool;

/// One selected question: the owning partition and the question ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    /// Partition the question belongs to.
    pub partition: PartitionId,
    /// Question identifier.
    pub id: u32,
}

/// Result returned to callers after a draw completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    /// Picks in final display order.
    pub picks: Vec<Pick>,
    /// Master seed the draw ran under.
    pub seed: u64,
    /// Optional label carried over from the seed policy.
    pub seed_label: Option<String>,
    /// Candidate IDs proposed while filling the batch.
    pub proposed: usize,
    /// Candidates rejected for being excluded or already selected.
    pub rejected_used: usize,
    /// Candidates rejected because their partition was already covered.
    /// Stays zero under subset coverage, which never proposes a covered
    /// partition.
    pub rejected_covered: usize,
}

/// Runs one draw to completion.
///
/// The batch is assembled according to the configured coverage policy,
/// then shuffled on a dedicated substream so the coverage order is not
/// exposed in the output. Fatal errors leave no partial result.
pub fn run(
    config: &DrawConfig,
    seed: u64,
    map: &PartitionMap,
    excluded: &BTreeSet<u32>,
) -> Result<DrawSummary, QuizError> {
    let mandatory = config.policy.mandatory(map)?;
    validate_batch(config, mandatory.len())?;
    let excluded = pool::normalize_exclusions(map, excluded);

    let mut summary = match &config.policy {
        CoveragePolicy::FullCoverage { .. } => {
            draw_rejection(config, seed, map, &excluded, mandatory.len())?
        }
        CoveragePolicy::SubsetCoverage { extras, .. } => {
            draw_phased(config, seed, map, &excluded, &mandatory, *extras)?
        }
    };

    let mut shuffle_rng = RngHandle::from_seed(determinism::shuffle_seed(seed));
    summary.picks.shuffle(&mut shuffle_rng);
    Ok(summary)
}

fn validate_batch(config: &DrawConfig, mandatory: usize) -> Result<(), QuizError> {
    if config.batch == 0 {
        return Err(QuizError::Config(ErrorInfo::new(
            "zero-batch",
            "draw batch must hold at least one pick",
        )));
    }
    let expected = mandatory + config.policy.extras();
    if config.batch != expected {
        return Err(QuizError::Config(
            ErrorInfo::new(
                "batch-mismatch",
                "batch size must equal mandatory partitions plus extras",
            )
            .with_context("batch", config.batch.to_string())
            .with_context("mandatory", mandatory.to_string())
            .with_context("extras", config.policy.extras().to_string()),
        ));
    }
    Ok(())
}

/// Full-coverage drawing: bounded rejection sampling over the whole space.
///
/// Candidates are proposed uniformly from `1..=K`. A candidate is rejected
/// when its ID was excluded or already selected, and, while the coverage
/// slots are still being filled, when its partition already appears in the
/// batch. The loop aborts once the attempt ceiling is crossed.
fn draw_rejection(
    config: &DrawConfig,
    seed: u64,
    map: &PartitionMap,
    excluded: &BTreeSet<u32>,
    coverage_slots: usize,
) -> Result<DrawSummary, QuizError> {
    let space = map.space();
    let ceiling = config.batch.saturating_mul(config.attempts_per_pick.max(1));
    let mut rng = RngHandle::from_seed(determinism::coverage_seed(seed));

    let mut picks = Vec::with_capacity(config.batch);
    let mut chosen = BTreeSet::new();
    let mut covered: BTreeSet<PartitionId> = BTreeSet::new();
    let mut proposed = 0usize;
    let mut rejected_used = 0usize;
    let mut rejected_covered = 0usize;

    while picks.len() < config.batch {
        if proposed >= ceiling {
            return Err(QuizError::ExhaustedSpace(
                ErrorInfo::new(
                    "attempt-ceiling",
                    "no eligible candidate found within the attempt ceiling",
                )
                .with_context("attempts", proposed.to_string())
                .with_context("accepted", picks.len().to_string())
                .with_context("batch", config.batch.to_string())
                .with_hint("the exclusion history may cover too much of the question space"),
            ));
        }
        proposed += 1;

        let id = rng.gen_range(space.first..=space.last);
        if excluded.contains(&id) || chosen.contains(&id) {
            rejected_used += 1;
            continue;
        }
        let partition = map.resolve(id)?;
        if picks.len() < coverage_slots && covered.contains(&partition) {
            rejected_covered += 1;
            continue;
        }

        chosen.insert(id);
        covered.insert(partition);
        picks.push(Pick { partition, id });
    }

    Ok(DrawSummary {
        picks,
        seed,
        seed_label: config.seed_policy.label.clone(),
        proposed,
        rejected_used,
        rejected_covered,
    })
}

/// Subset-coverage drawing: one direct draw per mandatory partition in
/// randomized order, then diversified extension picks.
fn draw_phased(
    config: &DrawConfig,
    seed: u64,
    map: &PartitionMap,
    excluded: &BTreeSet<u32>,
    mandatory: &[PartitionId],
    extras: usize,
) -> Result<DrawSummary, QuizError> {
    let shadow = pool::adjacency_shadow(map, excluded);
    let mut rng = RngHandle::from_seed(determinism::coverage_seed(seed));

    let mut order: Vec<PartitionId> = mandatory.to_vec();
    order.shuffle(&mut rng);

    let mut picks = Vec::with_capacity(config.batch);
    let mut chosen = BTreeSet::new();
    for partition in &order {
        let id = draw_from_partition(map, *partition, excluded, &chosen, &shadow, &mut rng)?;
        chosen.insert(id);
        picks.push(Pick {
            partition: *partition,
            id,
        });
    }

    // Extension phase: only partitions with a non-empty pool qualify.
    let mut ext_rng = RngHandle::from_seed(determinism::extension_seed(seed));
    let mut open = Vec::new();
    for partition in mandatory {
        let span = map.span(*partition)?;
        if !pool::eligible_pool(span, excluded, &chosen).is_empty() {
            open.push(*partition);
        }
    }
    if open.len() < extras {
        return Err(QuizError::InsufficientPartitions(
            ErrorInfo::new(
                "too-few-open-partitions",
                "not enough partitions keep an eligible question for the extension phase",
            )
            .with_context("needed", extras.to_string())
            .with_context("available", open.len().to_string())
            .with_hint("retire older quiz IDs from the exclusion history"),
        ));
    }
    open.shuffle(&mut ext_rng);
    for partition in open.into_iter().take(extras) {
        let id = draw_from_partition(map, partition, excluded, &chosen, &shadow, &mut ext_rng)?;
        chosen.insert(id);
        picks.push(Pick { partition, id });
    }

    let proposed = picks.len();
    Ok(DrawSummary {
        picks,
        seed,
        seed_label: config.seed_policy.label.clone(),
        proposed,
        rejected_used: 0,
        rejected_covered: 0,
    })
}

/// Draws one ID uniformly from the adjacency-narrowed pool of a partition.
fn draw_from_partition(
    map: &PartitionMap,
    partition: PartitionId,
    excluded: &BTreeSet<u32>,
    chosen: &BTreeSet<u32>,
    shadow: &BTreeSet<u32>,
    rng: &mut RngHandle,
) -> Result<u32, QuizError> {
    let span = map.span(partition)?;
    let eligible = pool::eligible_pool(span, excluded, chosen);
    if eligible.is_empty() {
        return Err(QuizError::ExhaustedPartition(
            ErrorInfo::new(
                "empty-pool",
                "mandatory partition has no eligible question left",
            )
            .with_context("partition", map.label(partition))
            .with_context("span", format!("{}..={}", span.first, span.last))
            .with_hint("retire older quiz IDs from the exclusion history"),
        ));
    }
    let narrowed = pool::narrowed_pool(eligible, shadow);
    Ok(narrowed[rng.gen_range(0..narrowed.len())])
}
