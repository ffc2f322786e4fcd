#![deny(missing_docs)]

//! Shared foundation for the quiz draw workspace: structured error types,
//! the deterministic RNG handle, and the partition table describing which
//! rule chapter owns each question identifier.

pub mod errors;
pub mod partition;
pub mod rng;

pub use errors::{ErrorInfo, QuizError};
pub use partition::{PartitionId, PartitionMap, PartitionSpan};
pub use rng::{derive_substream_seed, entropy_seed, RngHandle};
