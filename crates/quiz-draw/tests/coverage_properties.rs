use std::collections::{BTreeMap, BTreeSet};

use quiz_core::{PartitionId, PartitionMap, PartitionSpan};
use quiz_draw::{run, CoveragePolicy, DrawConfig, DrawSummary};

mod common;

fn partition_counts(summary: &DrawSummary) -> BTreeMap<PartitionId, usize> {
    let mut counts = BTreeMap::new();
    for pick in &summary.picks {
        *counts.entry(pick.partition).or_insert(0) += 1;
    }
    counts
}

fn assert_batch_is_sound(summary: &DrawSummary, map: &PartitionMap, excluded: &BTreeSet<u32>) {
    let ids: BTreeSet<u32> = summary.picks.iter().map(|pick| pick.id).collect();
    assert_eq!(ids.len(), summary.picks.len(), "IDs must be distinct");
    assert!(ids.is_disjoint(excluded), "no excluded ID may be selected");
    for pick in &summary.picks {
        assert_eq!(map.resolve(pick.id).unwrap(), pick.partition);
    }
}

#[test]
fn full_coverage_represents_every_partition() {
    let map = common::small_map();
    let excluded: BTreeSet<u32> = [3, 14, 25, 36, 47, 58].into_iter().collect();
    let config = DrawConfig {
        batch: 7,
        policy: CoveragePolicy::FullCoverage { extras: 1 },
        ..DrawConfig::default()
    };

    for seed in 0..16u64 {
        let summary = run(&config, seed, &map, &excluded).unwrap();
        assert_eq!(summary.picks.len(), 7);
        assert_batch_is_sound(&summary, &map, &excluded);

        let counts = partition_counts(&summary);
        assert_eq!(counts.len(), map.len(), "every partition must appear");
        let doubled: Vec<_> = counts.values().filter(|count| **count == 2).collect();
        assert_eq!(doubled.len(), 1, "exactly one partition holds the extra");
    }
}

#[test]
fn subset_coverage_represents_mandatory_partitions_and_diversifies_extras() {
    let map = common::small_map();
    let excluded: BTreeSet<u32> = [21, 22, 41].into_iter().collect();
    let mandatory = vec![1, 2, 3, 4, 5];
    let config = DrawConfig {
        batch: 7,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: mandatory.clone(),
            extras: 2,
        },
        ..DrawConfig::default()
    };

    for seed in 0..16u64 {
        let summary = run(&config, seed, &map, &excluded).unwrap();
        assert_eq!(summary.picks.len(), 7);
        assert_batch_is_sound(&summary, &map, &excluded);

        let counts = partition_counts(&summary);
        for raw in &mandatory {
            assert!(
                counts.contains_key(&PartitionId::from_raw(*raw)),
                "mandatory partition {raw} missing"
            );
        }
        for partition in counts.keys() {
            assert!(
                mandatory.contains(&partition.as_raw()),
                "subset draws stay inside the mandatory set"
            );
        }
        let doubled: Vec<_> = counts.values().filter(|count| **count == 2).collect();
        assert_eq!(doubled.len(), 2, "each extra lands in a distinct partition");
    }
}

#[test]
fn miniature_two_partition_batch() {
    let map = PartitionMap::from_spans([
        (PartitionId::from_raw(1), PartitionSpan::new(1, 5)),
        (PartitionId::from_raw(2), PartitionSpan::new(6, 10)),
    ])
    .unwrap();
    let config = DrawConfig {
        batch: 2,
        policy: CoveragePolicy::FullCoverage { extras: 0 },
        ..DrawConfig::default()
    };

    let summary = run(&config, 42, &map, &BTreeSet::new()).unwrap();
    assert_eq!(summary.picks.len(), 2);
    assert_batch_is_sound(&summary, &map, &BTreeSet::new());
    let counts = partition_counts(&summary);
    assert_eq!(counts.len(), 2, "one pick per partition");
}

#[test]
fn rejection_accounting_reports_proposals() {
    let map = common::small_map();
    let config = DrawConfig {
        batch: 7,
        policy: CoveragePolicy::FullCoverage { extras: 1 },
        ..DrawConfig::default()
    };

    let summary = run(&config, 11, &map, &BTreeSet::new()).unwrap();
    assert!(summary.proposed >= summary.picks.len());
    assert_eq!(
        summary.proposed,
        summary.picks.len() + summary.rejected_used + summary.rejected_covered
    );
}
