//! Capability traits consumed by the sequencer
//!
//! The sequencer never talks to the node directly; it goes through these
//! seams so batch construction and broadcast can be tested against mocks.

use crate::error::FlooderResult;

use async_trait::async_trait;
use ethers::types::{Address, Bytes, H256};

/// Chain-state query capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Current transaction count of an address, i.e. its next nonce
    async fn transaction_count(&self, address: Address) -> FlooderResult<u64>;
}

/// Raw transaction broadcast capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Submit a raw signed payload; resolves once the node accepts it
    /// into its pending pool
    async fn send_raw(&self, raw: Bytes) -> FlooderResult<H256>;
}
