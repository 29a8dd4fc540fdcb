//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the runner.
//! All types derive Serde traits for deserialization from config files.
//! Defaults reproduce the fixed constants the tool ships with, so a missing
//! config file still yields a runnable setup against a local dev node.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the batch mint runner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MintConfig {
    /// RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Mint target settings (contract, call data, gas).
    pub contract: ContractConfig,

    /// Batch pacing and file locations.
    pub batch: BatchConfig,
}

/// RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Expected chain ID, checked against the endpoint at startup.
    pub chain_id: u64,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// How long to poll for a transaction receipt before giving up.
    pub confirm_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            chain_id: 31337, // Anvil default
            timeout_secs: 10,
            confirm_timeout_secs: 180,
        }
    }
}

/// Mint target configuration.
///
/// Every wallet submits byte-identical call data to the same contract.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Target contract address.
    pub address: String,

    /// Call data sent with every transaction (4-byte selector, no arguments).
    pub calldata: String,

    /// Fixed gas limit; no estimation is performed.
    pub gas_limit: u64,

    /// Minimum native balance (in whole tokens) a wallet must hold before
    /// a send is attempted. Sized to cover gas for one mint.
    pub min_balance_eth: f64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            // First contract deployed by Anvil/Hardhat's deterministic deployer.
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            // mint()
            calldata: "0x1249c58b".to_string(),
            gas_limit: 300_000,
            min_balance_eth: 0.001,
        }
    }
}

/// Batch pacing and file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Newline-delimited private key file, one key per line.
    pub keys_file: PathBuf,

    /// Lower bound of the random inter-wallet delay, in milliseconds.
    pub delay_min_ms: u64,

    /// Upper bound (exclusive) of the random inter-wallet delay.
    pub delay_max_ms: u64,

    /// Directory the JSON report is written to.
    pub report_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            keys_file: PathBuf::from("private_keys.txt"),
            delay_min_ms: 2_000,
            delay_max_ms: 5_000,
            report_dir: PathBuf::from("."),
        }
    }
}
