//! Batch report types and persistence.
//!
//! The report is built once after the last wallet completes and written
//! to a single timestamped file; it is never updated afterward.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Final record for one wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintOutcome {
    /// 1-based position in the key file.
    pub wallet_index: usize,
    pub success: bool,
    pub message: String,
    /// Present whenever a transaction reached the mempool.
    pub tx_hash: Option<String>,
}

/// Summary of a completed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// ISO-8601 time the report was assembled.
    pub timestamp: String,
    pub contract_address: String,
    pub total_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    /// Percentage with one decimal place, e.g. "66.7".
    pub success_rate: String,
    pub results: Vec<MintOutcome>,
}

impl BatchReport {
    /// Assemble the report from per-wallet outcomes.
    pub fn build(contract_address: &str, results: Vec<MintOutcome>) -> Self {
        let total_count = results.len();
        let success_count = results.iter().filter(|r| r.success).count();
        let rate = if total_count == 0 {
            0.0
        } else {
            success_count as f64 * 100.0 / total_count as f64
        };

        Self {
            timestamp: Utc::now().to_rfc3339(),
            contract_address: contract_address.to_string(),
            total_count,
            success_count,
            failure_count: total_count - success_count,
            success_rate: format!("{:.1}", rate),
            results,
        }
    }

    /// Write the report as pretty-printed JSON into `dir`.
    ///
    /// The filename carries a millisecond epoch suffix so consecutive
    /// batches never overwrite each other.
    pub fn write(&self, dir: &Path) -> io::Result<PathBuf> {
        let filename = format!("mint_results_{}.json", Utc::now().timestamp_millis());
        let path = dir.join(filename);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}
