//! One-shot funding of the source accounts

use crate::chain::{ChainProvider, ChainReader};
use crate::error::FlooderResult;
use crate::keyring::{Keyring, KeyringStore};

use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest, U256};
use tracing::{info, warn};

/// Send one value transfer from the funder to each target, sequentially,
/// waiting for each receipt. The funder's nonce is queried once and
/// incremented locally. No retry.
pub async fn fund_accounts(
    provider: &ChainProvider,
    funder: Keyring,
    targets: &[Address],
    amount: U256,
    gas_limit: u64,
) -> FlooderResult<()> {
    let chain_id = provider.chain_id();
    let mut store = KeyringStore::new(chain_id);
    let from = store.register(funder);

    let start = provider.transaction_count(from).await?;
    let gas_price = provider.gas_price().await?;

    info!(
        "Funding {} accounts from {:?} starting at nonce {}",
        targets.len(),
        from,
        start
    );

    for (offset, &to) in targets.iter().enumerate() {
        let tx: TypedTransaction = TransactionRequest::new()
            .from(from)
            .to(to)
            .value(amount)
            .gas(gas_limit)
            .gas_price(gas_price)
            .nonce(start + offset as u64)
            .chain_id(chain_id)
            .into();

        let signed = store.sign(from, &tx).await?;

        match provider.submit_and_wait(signed.raw.clone()).await? {
            Some(receipt) => info!(
                "Funded {:?}: tx {:?} in block {:?}",
                to, signed.hash, receipt.block_number
            ),
            None => warn!("Funding tx {:?} for {:?} dropped before a receipt", signed.hash, to),
        }
    }

    Ok(())
}
