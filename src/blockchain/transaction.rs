//! Transaction building, signing, and receipt polling.
//!
//! # Responsibilities
//! - Build the fixed-payload transaction for one wallet
//! - Sign and broadcast through the shared client
//! - Poll for the receipt until mined or the window closes
//!
//! The gas limit is taken verbatim from configuration; no estimation is
//! performed. The nonce and gas price are read from the chain right
//! before the send, which is safe because sends are strictly sequential.

use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use tokio::time::{interval, timeout};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;

/// How often the receipt is polled while waiting for inclusion.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Builds and submits transactions for a single wallet.
pub struct TxSubmitter {
    client: BlockchainClient,
    wallet: Wallet,
}

impl TxSubmitter {
    /// Create a new submitter.
    pub fn new(client: BlockchainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build the mint transaction request.
    ///
    /// # Arguments
    /// * `to` - Destination contract address
    /// * `calldata` - Fixed call data (4-byte selector)
    /// * `gas_limit` - Fixed gas limit from configuration
    pub async fn build_mint(
        &self,
        to: Address,
        calldata: Bytes,
        gas_limit: u64,
    ) -> BlockchainResult<TransactionRequest> {
        let nonce = self
            .client
            .get_transaction_count(self.wallet.address())
            .await?;
        let gas_price = self.client.get_gas_price().await?;

        Ok(TransactionRequest::default()
            .with_to(to)
            .with_input(calldata)
            .with_nonce(nonce)
            .with_gas_price(gas_price)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(gas_limit))
    }

    /// Sign the request and broadcast it, returning the transaction hash.
    pub async fn submit(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let signer = EthereumWallet::from(self.wallet.signer().clone());
        let envelope = tx
            .build(&signer)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("signing failed: {}", e)))?;

        self.client.send_envelope(envelope).await
    }

    /// Wait for a transaction to be mined and return its receipt.
    ///
    /// # Arguments
    /// * `tx_hash` - Transaction hash to monitor
    /// * `timeout_secs` - Maximum time to wait for inclusion
    pub async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
    ) -> BlockchainResult<TransactionReceipt> {
        let result = timeout(Duration::from_secs(timeout_secs), async {
            let mut ticker = interval(RECEIPT_POLL_INTERVAL);

            loop {
                ticker.tick().await;

                match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(receipt) => return Ok(receipt),
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                    }
                }
            }
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(_) => Err(BlockchainError::ConfirmationTimeout(timeout_secs)),
        }
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RpcConfig;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_submitter_exposes_wallet_address() {
        let client = BlockchainClient::new(&RpcConfig::default()).unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let submitter = TxSubmitter::new(client, wallet);
        assert_eq!(
            submitter.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }
}
