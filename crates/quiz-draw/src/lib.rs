#![deny(missing_docs)]

//! Deterministic constrained sampler for weekly quiz batches.
//!
//! The engine selects a fixed-size batch of question IDs from a partitioned
//! ID space, never repeating an ID from the exclusion history, and
//! guaranteeing partition coverage according to a pluggable policy. All
//! randomness flows through substreams of one caller-supplied master seed.

/// Configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Core draw kernel and the public `run` entry point.
pub mod kernel;
/// Coverage policies governing partition representation.
pub mod policy;
/// Eligible-pool computation and adjacency narrowing.
pub mod pool;

pub use config::{DrawConfig, SeedPolicy};
pub use kernel::{run, DrawSummary, Pick};
pub use policy::CoveragePolicy;
