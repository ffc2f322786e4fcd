use quiz_core::derive_substream_seed;

/// Derives the seed for the coverage phase of a draw.
pub fn coverage_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, 1)
}

/// Derives the seed for the extension phase of a draw.
pub fn extension_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, 2)
}

/// Derives the seed for the final display shuffle.
///
/// The shuffle runs on its own substream so the pre-shuffle selection
/// content is a function of the master seed, the table and the exclusion
/// set alone.
pub fn shuffle_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed ^ 0x5A5A_5A5A_5A5A_5A5A, 3)
}
