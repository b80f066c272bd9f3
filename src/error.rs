//! Error types for txflood

use thiserror::Error;

/// Main error type for the flooder
#[derive(Error, Debug)]
pub enum FlooderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Nonce query failed for {address}: {message}")]
    Nonce { address: String, message: String },

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("No keyring registered for address {0}")]
    UnknownAccount(String),

    #[error("Batch length mismatch: account {account} produced {got} transactions, expected {expected}")]
    BatchMismatch {
        account: String,
        expected: usize,
        got: usize,
    },

    #[error("Submission failed for transaction {index}: {message}")]
    Submission { index: usize, message: String },

    #[error("Invalid amount {input:?}: {message}")]
    InvalidAmount { input: String, message: String },
}

/// Result type for flooder operations
pub type FlooderResult<T> = Result<T, FlooderError>;
