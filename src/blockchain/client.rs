//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint once and share the handle
//! - Query chain state (balances, nonces, gas price, receipts)
//! - Broadcast signed transaction envelopes
//! - Handle timeouts and network errors gracefully

use std::time::Duration;

use alloy::consensus::TxEnvelope;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::schema::RpcConfig;

/// Shared JSON-RPC client wrapper.
///
/// One instance is created at startup and cloned into every component
/// that talks to the chain. Cloning is cheap; the underlying transport
/// is shared.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: DynProvider,
    config: RpcConfig,
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new client for the configured endpoint.
    ///
    /// Construction is lazy: no network traffic happens until the first
    /// query, so this only fails on an unparseable URL.
    pub fn new(config: &RpcConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.url, e))
        })?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self {
            provider,
            config: config.clone(),
            timeout_duration: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Verify the remote chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<u64> {
        let fut = self.provider.get_chain_id();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(id)) => Ok(id),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("chain ID query failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get the native balance of an address.
    pub async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        let fut = self.provider.get_balance(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(balance)) => Ok(balance),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("balance query failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> BlockchainResult<u64> {
        let fut = self.provider.get_transaction_count(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("nonce query failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get the node's current gas price quote in wei.
    pub async fn get_gas_price(&self) -> BlockchainResult<u128> {
        let fut = self.provider.get_gas_price();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(price)) => Ok(price),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("gas price query failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get a transaction receipt by hash, if the transaction has been mined.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        let fut = self.provider.get_transaction_receipt(tx_hash);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(receipt)) => Ok(receipt),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("receipt query failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Broadcast a signed transaction envelope, returning its hash.
    pub async fn send_envelope(&self, envelope: TxEnvelope) -> BlockchainResult<TxHash> {
        let fut = self.provider.send_tx_envelope(envelope);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("broadcast failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get the configuration this client was built from.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}
