//! Gathered fire-and-forget broadcast

use crate::chain::Broadcaster;
use crate::error::FlooderError;
use crate::keyring::SignedTransfer;

use ethers::types::H256;
use futures::future::join_all;
use tracing::{error, info};

/// Outcome of a broadcast run
#[derive(Debug, Default)]
pub struct BroadcastReport {
    /// Hashes accepted into the node's pending pool
    pub submitted: Vec<H256>,
    /// Per-transaction submission failures, by flat-sequence index
    pub failures: Vec<FlooderError>,
}

impl BroadcastReport {
    pub fn total(&self) -> usize {
        self.submitted.len() + self.failures.len()
    }

    pub fn all_submitted(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Submit every transfer in flat-sequence order
///
/// Each submission is awaited only for acceptance into the pending pool.
/// Failures are isolated per transaction; one rejected payload never blocks
/// the rest of the sequence.
pub async fn broadcast_all(
    broadcaster: &dyn Broadcaster,
    transfers: &[SignedTransfer],
) -> BroadcastReport {
    let submissions = transfers.iter().enumerate().map(|(index, transfer)| async move {
        match broadcaster.send_raw(transfer.raw.clone()).await {
            Ok(hash) => {
                info!(
                    "Submitted {:?} (account {:?}, nonce {})",
                    hash, transfer.from, transfer.nonce
                );
                Ok(hash)
            }
            Err(e) => Err(FlooderError::Submission {
                index,
                message: e.to_string(),
            }),
        }
    });

    let mut report = BroadcastReport::default();
    for result in join_all(submissions).await {
        match result {
            Ok(hash) => report.submitted.push(hash),
            Err(e) => {
                error!("{}", e);
                report.failures.push(e);
            }
        }
    }

    report
}
