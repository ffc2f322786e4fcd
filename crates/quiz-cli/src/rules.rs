//! Built-in partition table of the refereeing regulations.

use quiz_core::{PartitionId, PartitionMap, PartitionSpan, QuizError};
use quiz_draw::{CoveragePolicy, DrawConfig};

/// Inclusive question-ID bounds per rule chapter.
const RULE_BOUNDS: [(u32, u32, u32); 19] = [
    (1, 1, 43),
    (2, 44, 66),
    (3, 67, 115),
    (4, 116, 141),
    (5, 142, 182),
    (6, 183, 247),
    (7, 248, 270),
    (8, 271, 298),
    (9, 299, 308),
    (10, 309, 336),
    (11, 337, 366),
    (12, 367, 489),
    (13, 490, 525),
    (14, 526, 556),
    (15, 557, 582),
    (16, 583, 603),
    (17, 604, 621),
    (18, 622, 690),
    (19, 691, 716),
];

/// Symbolic labels for the cross-cutting chapters: the association
/// regulations (chapter 18) and the technical-bodies regulations (19).
const SYMBOLIC_LABELS: [(u32, &str); 2] = [(18, "ASS"), (19, "NFOT")];

/// Builds the built-in 19-chapter partition table.
pub fn rule_table() -> Result<PartitionMap, QuizError> {
    let mut map = PartitionMap::from_spans(RULE_BOUNDS.iter().map(|(rule, first, last)| {
        (
            PartitionId::from_raw(*rule),
            PartitionSpan::new(*first, *last),
        )
    }))?;
    for (rule, label) in SYMBOLIC_LABELS {
        map = map.with_label(PartitionId::from_raw(rule), label)?;
    }
    Ok(map)
}

/// Mandatory chapters of the restricted weekly draw: rules 1-17.
pub fn restricted_partitions() -> Vec<u32> {
    (1..=17).collect()
}

/// Default configuration of the restricted weekly draw: one question per
/// rule chapter plus three diversified extras.
pub fn restricted_config() -> DrawConfig {
    DrawConfig {
        policy: CoveragePolicy::SubsetCoverage {
            partitions: restricted_partitions(),
            extras: 3,
        },
        ..DrawConfig::default()
    }
}
