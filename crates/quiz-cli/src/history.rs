//! Exclusion history of the three previous quiz batches.

use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// IDs used by the most recent quiz.
const QUIZ_1: [u32; 20] = [
    111, 25, 46, 676, 298, 537, 315, 511, 437, 604, 148, 577, 223, 596, 258, 346, 126, 712, 308,
    135,
];
/// IDs used two quizzes ago.
const QUIZ_2: [u32; 20] = [
    569, 625, 491, 379, 35, 208, 107, 314, 117, 277, 53, 146, 702, 527, 586, 266, 611, 359, 304,
    692,
];
/// IDs used three quizzes ago.
const QUIZ_3: [u32; 20] = [
    446, 264, 539, 206, 320, 29, 704, 686, 520, 141, 350, 574, 145, 597, 286, 110, 306, 58, 610,
    239,
];

/// Merged exclusion set of the built-in history.
pub fn built_in() -> BTreeSet<u32> {
    QUIZ_1
        .iter()
        .chain(&QUIZ_2)
        .chain(&QUIZ_3)
        .copied()
        .collect()
}

/// YAML history document: a list of past quizzes, each a list of IDs.
#[derive(Debug, Deserialize)]
struct HistoryFile {
    quizzes: Vec<Vec<u32>>,
}

/// Loads an exclusion set from a YAML history file, replacing the built-in
/// lists.
pub fn load(path: &Path) -> Result<BTreeSet<u32>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let file: HistoryFile = serde_yaml::from_str(&contents)?;
    Ok(file.quizzes.into_iter().flatten().collect())
}
