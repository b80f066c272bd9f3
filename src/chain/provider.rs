//! Single-node HTTP provider

use crate::chain::traits::{Broadcaster, ChainReader};
use crate::config::NodeConfig;
use crate::error::{FlooderError, FlooderResult};

use async_trait::async_trait;
use ethers::prelude::*;
use ethers::providers::{Http, Provider};
use std::time::Duration;
use tracing::{debug, info};

/// Connection to the target node
pub struct ChainProvider {
    http: Provider<Http>,
    chain_id: u64,
}

impl ChainProvider {
    /// Connect to the configured node and discover its chain id
    pub async fn new(config: &NodeConfig) -> FlooderResult<Self> {
        let http = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| {
                FlooderError::Config(format!("Invalid RPC URL {}: {}", config.rpc_url, e))
            })?
            .interval(Duration::from_millis(100));

        let chain_id = http
            .get_chainid()
            .await
            .map_err(|e| FlooderError::Rpc(format!("chain id query failed: {}", e)))?
            .as_u64();

        info!("Connected to {} (chain id {})", config.rpc_url, chain_id);

        Ok(Self { http, chain_id })
    }

    /// Chain id reported by the node, bound into every signature
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Current gas price suggested by the node
    pub async fn gas_price(&self) -> FlooderResult<U256> {
        let price = self
            .http
            .get_gas_price()
            .await
            .map_err(|e| FlooderError::Rpc(format!("gas price query failed: {}", e)))?;

        debug!("Node gas price: {}", price);
        Ok(price)
    }

    /// Submit a raw payload and wait for its receipt
    ///
    /// Used by funding only; flood submissions go through [`Broadcaster`]
    /// and never wait for inclusion.
    pub async fn submit_and_wait(
        &self,
        raw: Bytes,
    ) -> FlooderResult<Option<TransactionReceipt>> {
        let pending = self
            .http
            .send_raw_transaction(raw)
            .await
            .map_err(|e| FlooderError::Rpc(format!("submission failed: {}", e)))?;

        pending
            .await
            .map_err(|e| FlooderError::Rpc(format!("receipt wait failed: {}", e)))
    }
}

#[async_trait]
impl ChainReader for ChainProvider {
    async fn transaction_count(&self, address: Address) -> FlooderResult<u64> {
        let count = self
            .http
            .get_transaction_count(address, None)
            .await
            .map_err(|e| FlooderError::Nonce {
                address: format!("{:?}", address),
                message: e.to_string(),
            })?;

        Ok(count.as_u64())
    }
}

#[async_trait]
impl Broadcaster for ChainProvider {
    async fn send_raw(&self, raw: Bytes) -> FlooderResult<H256> {
        let pending = self
            .http
            .send_raw_transaction(raw)
            .await
            .map_err(|e| FlooderError::Rpc(e.to_string()))?;

        Ok(pending.tx_hash())
    }
}
