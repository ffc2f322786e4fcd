use std::collections::BTreeSet;

use quiz_core::{PartitionId, PartitionMap, PartitionSpan, QuizError};
use quiz_draw::{run, CoveragePolicy, DrawConfig};

fn two_partitions() -> PartitionMap {
    PartitionMap::from_spans([
        (PartitionId::from_raw(1), PartitionSpan::new(1, 3)),
        (PartitionId::from_raw(2), PartitionSpan::new(4, 6)),
    ])
    .unwrap()
}

#[test]
fn exhausted_partition_is_named_and_nothing_is_returned() {
    let map = two_partitions();
    let excluded: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
    let config = DrawConfig {
        batch: 2,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: vec![1, 2],
            extras: 0,
        },
        ..DrawConfig::default()
    };

    for seed in 0..8u64 {
        match run(&config, seed, &map, &excluded) {
            Err(QuizError::ExhaustedPartition(info)) => {
                assert_eq!(info.code, "empty-pool");
                assert_eq!(info.context.get("partition").map(String::as_str), Some("1"));
            }
            other => panic!("expected exhausted partition, got {other:?}"),
        }
    }
}

#[test]
fn extension_phase_requires_enough_open_partitions() {
    let map = PartitionMap::from_spans([
        (PartitionId::from_raw(1), PartitionSpan::new(1, 1)),
        (PartitionId::from_raw(2), PartitionSpan::new(2, 2)),
    ])
    .unwrap();
    let config = DrawConfig {
        batch: 3,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: vec![1, 2],
            extras: 1,
        },
        ..DrawConfig::default()
    };

    match run(&config, 5, &map, &BTreeSet::new()) {
        Err(QuizError::InsufficientPartitions(info)) => {
            assert_eq!(info.code, "too-few-open-partitions");
            assert_eq!(info.context.get("needed").map(String::as_str), Some("1"));
            assert_eq!(info.context.get("available").map(String::as_str), Some("0"));
        }
        other => panic!("expected insufficient partitions, got {other:?}"),
    }
}

#[test]
fn rejection_sampling_stops_at_the_attempt_ceiling() {
    let map = PartitionMap::from_spans([(PartitionId::from_raw(1), PartitionSpan::new(1, 4))])
        .unwrap();
    let excluded: BTreeSet<u32> = [1, 2, 3, 4].into_iter().collect();
    let config = DrawConfig {
        batch: 4,
        policy: CoveragePolicy::FullCoverage { extras: 3 },
        attempts_per_pick: 8,
        ..DrawConfig::default()
    };

    match run(&config, 1, &map, &excluded) {
        Err(QuizError::ExhaustedSpace(info)) => {
            assert_eq!(info.code, "attempt-ceiling");
            assert_eq!(info.context.get("accepted").map(String::as_str), Some("0"));
        }
        other => panic!("expected exhausted space, got {other:?}"),
    }
}

#[test]
fn batch_size_must_match_the_policy() {
    let map = two_partitions();
    let config = DrawConfig {
        batch: 5,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: vec![1, 2],
            extras: 0,
        },
        ..DrawConfig::default()
    };

    match run(&config, 0, &map, &BTreeSet::new()) {
        Err(QuizError::Config(info)) => assert_eq!(info.code, "batch-mismatch"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn subset_policies_must_name_declared_partitions() {
    let map = two_partitions();
    let config = DrawConfig {
        batch: 3,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: vec![1, 9],
            extras: 1,
        },
        ..DrawConfig::default()
    };

    match run(&config, 0, &map, &BTreeSet::new()) {
        Err(QuizError::Config(info)) => {
            assert_eq!(info.code, "unknown-mandatory-partition");
            assert_eq!(info.context.get("partition").map(String::as_str), Some("9"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn duplicate_mandatory_partitions_are_rejected() {
    let map = two_partitions();
    let config = DrawConfig {
        batch: 3,
        policy: CoveragePolicy::SubsetCoverage {
            partitions: vec![1, 1],
            extras: 1,
        },
        ..DrawConfig::default()
    };

    match run(&config, 0, &map, &BTreeSet::new()) {
        Err(QuizError::Config(info)) => assert_eq!(info.code, "duplicate-mandatory-partition"),
        other => panic!("expected config error, got {other:?}"),
    }
}
