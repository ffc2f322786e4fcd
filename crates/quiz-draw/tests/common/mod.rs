use quiz_core::{PartitionId, PartitionMap, PartitionSpan};

/// Six partitions of ten questions each, IDs `1..=60`.
pub fn small_map() -> PartitionMap {
    PartitionMap::from_spans((0..6u32).map(|idx| {
        (
            PartitionId::from_raw(idx + 1),
            PartitionSpan::new(idx * 10 + 1, idx * 10 + 10),
        )
    }))
    .unwrap()
}
