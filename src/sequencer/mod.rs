//! Batch transaction sequencer
//!
//! Builds per-account batches of signed value transfers with incrementing
//! nonces, interleaves them round-major across accounts, and broadcasts the
//! flattened sequence.

mod batch;
mod broadcast;

pub use batch::{build_batches, flatten, TransferPlan};
pub use broadcast::{broadcast_all, BroadcastReport};
