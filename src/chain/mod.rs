//! Chain module - connection to the target JSON-RPC node
//!
//! This module provides:
//! - The capability traits the sequencer consumes (chain-state query, broadcast)
//! - A single-node HTTP provider implementing both

pub mod provider;
pub mod traits;

pub use provider::ChainProvider;
pub use traits::{Broadcaster, ChainReader};
