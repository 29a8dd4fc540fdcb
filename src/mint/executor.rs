//! Single-wallet mint execution.
//!
//! # Responsibilities
//! - Derive the wallet and check its balance against the send threshold
//! - Build and submit the fixed-payload transaction
//! - Classify the mined receipt into a success or failure record
//!
//! The executor never returns an error: every failure mode inside one
//! wallet's attempt is folded into its `MintAttempt`, so one wallet can
//! never abort the batch.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, Bytes};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::transaction::TxSubmitter;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::ContractConfig;

/// Parsed mint target. Identical for every wallet in the batch.
#[derive(Debug, Clone)]
pub struct MintTarget {
    /// Destination contract.
    pub address: Address,
    /// Fixed call data (4-byte selector, no arguments).
    pub calldata: Bytes,
    /// Fixed gas limit.
    pub gas_limit: u64,
    /// Minimum balance (whole native tokens) required before a send.
    pub min_balance_eth: f64,
}

impl MintTarget {
    /// Parse the configured strings into chain types.
    pub fn from_config(config: &ContractConfig) -> BlockchainResult<Self> {
        let address = config.address.parse::<Address>().map_err(|e| {
            BlockchainError::Target(format!(
                "invalid contract address '{}': {}",
                config.address, e
            ))
        })?;
        let calldata = config.calldata.parse::<Bytes>().map_err(|e| {
            BlockchainError::Target(format!("invalid call data '{}': {}", config.calldata, e))
        })?;

        Ok(Self {
            address,
            calldata,
            gas_limit: config.gas_limit,
            min_balance_eth: config.min_balance_eth,
        })
    }
}

/// Outcome of one wallet's attempt, before the batch index is attached.
#[derive(Debug, Clone)]
pub struct MintAttempt {
    pub success: bool,
    pub message: String,
    pub tx_hash: Option<String>,
}

impl MintAttempt {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            tx_hash: None,
        }
    }
}

/// Runs the mint sequence for one wallet at a time.
pub struct MintExecutor {
    client: BlockchainClient,
    target: MintTarget,
    confirm_timeout_secs: u64,
}

impl MintExecutor {
    /// Create a new executor over the shared client.
    pub fn new(client: BlockchainClient, target: MintTarget) -> Self {
        let confirm_timeout_secs = client.config().confirm_timeout_secs;
        Self {
            client,
            target,
            confirm_timeout_secs,
        }
    }

    /// Attempt the mint for one private key.
    ///
    /// Never returns an error; every failure is recorded in the attempt.
    pub async fn execute(&self, private_key: &str) -> MintAttempt {
        let wallet = match Wallet::from_private_key(private_key, self.client.config().chain_id) {
            Ok(wallet) => wallet,
            Err(e) => return MintAttempt::failure(format!("invalid private key: {}", e)),
        };
        let address = wallet.address();

        let balance = self.fetch_balance(address).await;
        tracing::info!(address = %address, balance_eth = %balance, "Wallet ready");

        if !meets_threshold(&balance, self.target.min_balance_eth) {
            tracing::warn!(
                address = %address,
                balance_eth = %balance,
                min_eth = self.target.min_balance_eth,
                "Insufficient balance, skipping send"
            );
            return MintAttempt::failure("insufficient balance");
        }

        let submitter = TxSubmitter::new(self.client.clone(), wallet);

        let tx = match submitter
            .build_mint(
                self.target.address,
                self.target.calldata.clone(),
                self.target.gas_limit,
            )
            .await
        {
            Ok(tx) => tx,
            Err(e) => return MintAttempt::failure(format!("send failed: {}", e)),
        };

        let tx_hash = match submitter.submit(tx).await {
            Ok(hash) => hash,
            Err(e) => return MintAttempt::failure(format!("send failed: {}", e)),
        };
        tracing::info!(address = %address, tx_hash = %tx_hash, "Transaction broadcast");

        let receipt = match submitter
            .wait_for_receipt(tx_hash, self.confirm_timeout_secs)
            .await
        {
            Ok(receipt) => receipt,
            Err(e) => {
                // Keep the hash: the transaction may still land later and
                // the operator will want to look it up.
                return MintAttempt {
                    success: false,
                    message: format!("confirmation failed: {}", e),
                    tx_hash: Some(tx_hash.to_string()),
                };
            }
        };

        classify_receipt(receipt.status(), tx_hash.to_string())
    }

    /// Native balance of an address as a decimal string.
    ///
    /// A failed query degrades to `"0"`, which fails the threshold check
    /// and skips the wallet instead of crashing the batch.
    async fn fetch_balance(&self, address: Address) -> String {
        match self.client.get_balance(address).await {
            Ok(raw) => format_ether(raw),
            Err(e) => {
                tracing::error!(address = %address, error = %e, "Balance query failed, treating as zero");
                "0".to_string()
            }
        }
    }
}

/// Whether a formatted balance clears the send threshold.
fn meets_threshold(balance_eth: &str, min_eth: f64) -> bool {
    balance_eth.parse::<f64>().unwrap_or(0.0) >= min_eth
}

/// Map a mined receipt's status flag onto the attempt record.
fn classify_receipt(status: bool, tx_hash: String) -> MintAttempt {
    if status {
        MintAttempt {
            success: true,
            message: "mint succeeded".to_string(),
            tx_hash: Some(tx_hash),
        }
    } else {
        MintAttempt {
            success: false,
            message: "transaction failed".to_string(),
            tx_hash: Some(tx_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_gate() {
        assert!(!meets_threshold("0", 0.001));
        assert!(!meets_threshold("0.000900000000000000", 0.001));
        assert!(meets_threshold("0.001", 0.001));
        assert!(meets_threshold("1.000000000000000000", 0.001));
        // Unparseable balances fail closed
        assert!(!meets_threshold("garbage", 0.001));
    }

    #[test]
    fn test_receipt_classification() {
        let ok = classify_receipt(true, "0xabc".to_string());
        assert!(ok.success);
        assert_eq!(ok.message, "mint succeeded");
        assert_eq!(ok.tx_hash.as_deref(), Some("0xabc"));

        let reverted = classify_receipt(false, "0xdef".to_string());
        assert!(!reverted.success);
        assert_eq!(reverted.message, "transaction failed");
        // The hash is preserved for manual inspection
        assert_eq!(reverted.tx_hash.as_deref(), Some("0xdef"));
    }

    #[test]
    fn test_target_from_default_config() {
        let target = MintTarget::from_config(&ContractConfig::default()).unwrap();
        assert_eq!(target.calldata.len(), 4);
        assert_eq!(target.gas_limit, 300_000);
        assert_eq!(target.min_balance_eth, 0.001);
    }

    #[test]
    fn test_target_rejects_bad_address() {
        let config = ContractConfig {
            address: "0x123".to_string(),
            ..ContractConfig::default()
        };
        let result = MintTarget::from_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("contract address"));
    }
}
