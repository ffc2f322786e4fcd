use std::collections::BTreeSet;

use quiz_core::{PartitionMap, PartitionSpan};

/// Normalizes a caller-supplied exclusion set against the partition table.
///
/// IDs outside the valid space are dropped silently.
pub fn normalize_exclusions(map: &PartitionMap, raw: &BTreeSet<u32>) -> BTreeSet<u32> {
    raw.iter()
        .copied()
        .filter(|id| map.contains_id(*id))
        .collect()
}

/// IDs at distance 1 from any excluded ID that lie inside the valid space.
///
/// [`narrowed_pool`] prefers candidates outside this shadow.
pub fn adjacency_shadow(map: &PartitionMap, excluded: &BTreeSet<u32>) -> BTreeSet<u32> {
    let mut shadow = BTreeSet::new();
    for id in excluded {
        if *id > 1 && map.contains_id(id - 1) {
            shadow.insert(id - 1);
        }
        if map.contains_id(id + 1) {
            shadow.insert(id + 1);
        }
    }
    shadow
}

/// Eligible pool of one partition: its span minus the exclusion set minus
/// the IDs already selected in the current batch.
pub fn eligible_pool(
    span: PartitionSpan,
    excluded: &BTreeSet<u32>,
    selected: &BTreeSet<u32>,
) -> Vec<u32> {
    span.ids()
        .filter(|id| !excluded.contains(id) && !selected.contains(id))
        .collect()
}

/// Applies the adjacency-avoidance preference to a pool.
///
/// Candidates inside the shadow are dropped, unless that would empty the
/// pool entirely, in which case the original pool is returned unchanged.
/// The preference is soft: it never makes a draw fail.
pub fn narrowed_pool(pool: Vec<u32>, shadow: &BTreeSet<u32>) -> Vec<u32> {
    let narrowed: Vec<u32> = pool
        .iter()
        .copied()
        .filter(|id| !shadow.contains(id))
        .collect();
    if narrowed.is_empty() {
        pool
    } else {
        narrowed
    }
}
