//! Keyrings and the explicit signing registry
//!
//! Accounts are registered into a [`KeyringStore`] up front; signing looks the
//! account up by address and fails if it was never registered. The store is
//! append-only and read-only after setup.

use crate::error::{FlooderError, FlooderResult};

use ethers::core::rand;
use ethers::prelude::*;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::utils::keccak256;
use std::collections::HashMap;

/// A fully signed transfer, ready for submission
#[derive(Debug, Clone)]
pub struct SignedTransfer {
    /// Source account
    pub from: Address,
    /// Nonce the transfer was signed with
    pub nonce: u64,
    /// Transaction hash of the signed payload
    pub hash: H256,
    /// RLP-encoded signed payload
    pub raw: Bytes,
}

/// A private key and its derived address
#[derive(Debug, Clone)]
pub struct Keyring {
    wallet: LocalWallet,
    address: Address,
}

impl Keyring {
    /// Generate a fresh random keyring
    pub fn generate() -> Self {
        let wallet = LocalWallet::new(&mut rand::thread_rng());
        let address = wallet.address();
        Self { wallet, address }
    }

    /// Build a keyring from a hex-encoded private key
    pub fn from_private_key(secret: &str) -> FlooderResult<Self> {
        let wallet = secret
            .parse::<LocalWallet>()
            .map_err(|e| FlooderError::Signing(format!("Invalid private key: {}", e)))?;
        let address = wallet.address();
        Ok(Self { wallet, address })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Hex private key, 0x-prefixed
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.wallet.signer().to_bytes()))
    }
}

/// Explicit address -> signing context mapping
pub struct KeyringStore {
    chain_id: u64,
    wallets: HashMap<Address, LocalWallet>,
    order: Vec<Address>,
}

impl KeyringStore {
    /// Create an empty store bound to a chain id
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            wallets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a keyring; its signatures will carry the store's chain id
    pub fn register(&mut self, keyring: Keyring) -> Address {
        let address = keyring.address;
        if !self.wallets.contains_key(&address) {
            self.wallets
                .insert(address, keyring.wallet.with_chain_id(self.chain_id));
            self.order.push(address);
        }
        address
    }

    /// Registered addresses, in registration order
    pub fn addresses(&self) -> &[Address] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sign a transaction for a registered account
    pub async fn sign(
        &self,
        from: Address,
        tx: &TypedTransaction,
    ) -> FlooderResult<SignedTransfer> {
        let wallet = self
            .wallets
            .get(&from)
            .ok_or_else(|| FlooderError::UnknownAccount(format!("{:?}", from)))?;

        let signature = wallet
            .sign_transaction(tx)
            .await
            .map_err(|e| FlooderError::Signing(e.to_string()))?;

        let raw = tx.rlp_signed(&signature);
        let hash = H256::from(keccak256(&raw));
        let nonce = tx.nonce().map(|n| n.as_u64()).unwrap_or_default();

        Ok(SignedTransfer {
            from,
            nonce,
            hash,
            raw,
        })
    }
}
