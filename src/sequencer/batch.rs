//! Batch construction and round-major flattening

use crate::chain::ChainReader;
use crate::error::{FlooderError, FlooderResult};
use crate::keyring::{KeyringStore, SignedTransfer};

use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest, U256};
use tracing::debug;

/// Parameters shared by every transfer in a flood run
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub destination: Address,
    /// Amount per transfer, in peb
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: U256,
    pub chain_id: u64,
    /// Transactions built per source account
    pub txs_per_account: usize,
}

fn build_transfer(plan: &TransferPlan, from: Address, nonce: u64) -> TypedTransaction {
    TransactionRequest::new()
        .from(from)
        .to(plan.destination)
        .value(plan.value)
        .gas(plan.gas_limit)
        .gas_price(plan.gas_price)
        .nonce(nonce)
        .chain_id(plan.chain_id)
        .into()
}

/// Build one batch of signed transfers per registered account
///
/// Each account's starting nonce is its transaction count queried immediately
/// before that account's batch is built; a failed query aborts the run.
/// Signing is sequential in ascending nonce order.
pub async fn build_batches(
    reader: &dyn ChainReader,
    store: &KeyringStore,
    plan: &TransferPlan,
) -> FlooderResult<Vec<Vec<SignedTransfer>>> {
    let mut batches = Vec::with_capacity(store.len());

    for &from in store.addresses() {
        let start = reader.transaction_count(from).await?;
        debug!("Account {:?} starts at nonce {}", from, start);

        let mut batch = Vec::with_capacity(plan.txs_per_account);
        for offset in 0..plan.txs_per_account as u64 {
            let tx = build_transfer(plan, from, start + offset);
            let signed = store.sign(from, &tx).await?;
            batch.push(signed);
        }
        batches.push(batch);
    }

    Ok(batches)
}

/// Transpose per-account batches into round-major submission order
///
/// `flat[r * N + a] == batches[a][r]`: every account's r-th transfer precedes
/// any account's (r+1)-th. Unequal batch lengths are a fatal error, never
/// silent truncation.
pub fn flatten(batches: &[Vec<SignedTransfer>]) -> FlooderResult<Vec<SignedTransfer>> {
    let expected = batches.first().map(|b| b.len()).unwrap_or(0);

    for (index, batch) in batches.iter().enumerate() {
        if batch.len() != expected {
            let account = batch
                .first()
                .map(|t| format!("{:?}", t.from))
                .unwrap_or_else(|| format!("#{}", index));
            return Err(FlooderError::BatchMismatch {
                account,
                expected,
                got: batch.len(),
            });
        }
    }

    let mut flat = Vec::with_capacity(batches.len() * expected);
    for round in 0..expected {
        for batch in batches {
            flat.push(batch[round].clone());
        }
    }

    Ok(flat)
}
