//! Partition table mapping question identifiers to rule chapters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, QuizError};

/// Identifier for a partition within a [`PartitionMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartitionId(u32);

impl PartitionId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

/// Inclusive interval of question IDs owned by a single partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpan {
    /// First question ID of the interval.
    pub first: u32,
    /// Last question ID of the interval.
    pub last: u32,
}

impl PartitionSpan {
    /// Creates a new inclusive span.
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Returns whether the span owns the given question ID.
    pub fn contains(&self, id: u32) -> bool {
        id >= self.first && id <= self.last
    }

    /// Number of question IDs in the span.
    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    /// Returns whether the span is empty. Validated spans never are.
    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    /// Iterates over the question IDs owned by the span in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

/// Validated partition table covering the question ID space.
///
/// Partitions carry disjoint inclusive spans that tile `1..=K` without
/// gaps, where `K` is the upper bound of the space. Most partitions are
/// displayed by their number; a sparse override table assigns symbolic
/// labels to designated chapters. The table is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionMap {
    spans: BTreeMap<PartitionId, PartitionSpan>,
    #[serde(default)]
    labels: BTreeMap<PartitionId, String>,
}

impl PartitionMap {
    /// Builds a table from `(partition, span)` pairs, validating that the
    /// spans are non-empty, pairwise disjoint and tile the space from 1 up
    /// to the largest bound.
    pub fn from_spans(
        entries: impl IntoIterator<Item = (PartitionId, PartitionSpan)>,
    ) -> Result<Self, QuizError> {
        let mut spans = BTreeMap::new();
        for (partition, span) in entries {
            if span.is_empty() {
                return Err(QuizError::OutOfRange(
                    ErrorInfo::new("empty-span", "partition span has no question IDs")
                        .with_context("partition", partition.as_raw().to_string()),
                ));
            }
            if spans.insert(partition, span).is_some() {
                return Err(QuizError::OutOfRange(
                    ErrorInfo::new("duplicate-partition", "partition declared twice")
                        .with_context("partition", partition.as_raw().to_string()),
                ));
            }
        }
        if spans.is_empty() {
            return Err(QuizError::OutOfRange(ErrorInfo::new(
                "empty-table",
                "partition table declares no partitions",
            )));
        }

        let mut ordered: Vec<(PartitionId, PartitionSpan)> =
            spans.iter().map(|(id, span)| (*id, *span)).collect();
        ordered.sort_by_key(|(_, span)| span.first);
        let mut expected = 1u32;
        for (partition, span) in ordered {
            if span.first != expected {
                let code = if span.first < expected {
                    "span-overlap"
                } else {
                    "span-gap"
                };
                return Err(QuizError::OutOfRange(
                    ErrorInfo::new(code, "partition spans must tile the ID space contiguously")
                        .with_context("partition", partition.as_raw().to_string())
                        .with_context("expected_first", expected.to_string())
                        .with_context("actual_first", span.first.to_string()),
                ));
            }
            expected = span.last + 1;
        }

        Ok(Self {
            spans,
            labels: BTreeMap::new(),
        })
    }

    /// Assigns a symbolic display label to a declared partition.
    pub fn with_label(
        mut self,
        partition: PartitionId,
        label: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if !self.spans.contains_key(&partition) {
            return Err(QuizError::OutOfRange(
                ErrorInfo::new("unknown-partition", "label refers to an undeclared partition")
                    .with_context("partition", partition.as_raw().to_string()),
            ));
        }
        self.labels.insert(partition, label.into());
        Ok(self)
    }

    /// Resolves the partition owning the given question ID.
    pub fn resolve(&self, id: u32) -> Result<PartitionId, QuizError> {
        self.spans
            .iter()
            .find(|(_, span)| span.contains(id))
            .map(|(partition, _)| *partition)
            .ok_or_else(|| {
                QuizError::OutOfRange(
                    ErrorInfo::new("id-out-of-range", "question ID belongs to no partition")
                        .with_context("id", id.to_string())
                        .with_context("space", format!("1..={}", self.upper_bound())),
                )
            })
    }

    /// Returns the display label for a partition: the symbolic override
    /// when one is configured, the bare partition number otherwise.
    pub fn label(&self, partition: PartitionId) -> String {
        match self.labels.get(&partition) {
            Some(symbolic) => symbolic.clone(),
            None => partition.as_raw().to_string(),
        }
    }

    /// Returns the span owned by a partition.
    pub fn span(&self, partition: PartitionId) -> Result<PartitionSpan, QuizError> {
        self.spans.get(&partition).copied().ok_or_else(|| {
            QuizError::OutOfRange(
                ErrorInfo::new("unknown-partition", "partition is not declared in the table")
                    .with_context("partition", partition.as_raw().to_string()),
            )
        })
    }

    /// Iterates over the declared partitions in ascending identifier order.
    pub fn partitions(&self) -> impl ExactSizeIterator<Item = PartitionId> + '_ {
        self.spans.keys().copied()
    }

    /// Number of declared partitions.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns whether the table is empty. Validated tables never are.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns whether any partition owns the given question ID.
    pub fn contains_id(&self, id: u32) -> bool {
        self.spans.values().any(|span| span.contains(id))
    }

    /// Upper bound `K` of the question space `1..=K`.
    pub fn upper_bound(&self) -> u32 {
        self.spans
            .values()
            .map(|span| span.last)
            .max()
            .unwrap_or(0)
    }

    /// The whole question space as one inclusive span.
    pub fn space(&self) -> PartitionSpan {
        PartitionSpan::new(1, self.upper_bound())
    }
}
