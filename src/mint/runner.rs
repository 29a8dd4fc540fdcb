//! Sequential batch orchestration.
//!
//! # Responsibilities
//! - Load the key file and abort early when it yields nothing
//! - Drive the executor over every key in file order
//! - Pace consecutive wallets with a random delay
//! - Persist the final report
//!
//! Each wallet's attempt fully completes, including the receipt wait,
//! before the next begins. The pacing delay keeps the endpoint from
//! rate-limiting the batch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::keys::load_key_file;
use crate::blockchain::types::BlockchainResult;
use crate::config::schema::{BatchConfig, MintConfig};
use crate::mint::executor::{MintExecutor, MintTarget};
use crate::mint::report::{BatchReport, MintOutcome};

/// Drives one batch from key file to report file.
pub struct BatchRunner {
    client: BlockchainClient,
    config: MintConfig,
    target: MintTarget,
}

impl BatchRunner {
    /// Create a runner; fails only if the configured mint target cannot
    /// be parsed.
    pub fn new(client: BlockchainClient, config: MintConfig) -> BlockchainResult<Self> {
        let target = MintTarget::from_config(&config.contract)?;
        Ok(Self {
            client,
            config,
            target,
        })
    }

    /// Run the batch to completion.
    ///
    /// Returns the report path, or `None` when the key file yields no
    /// valid keys (in which case nothing is written).
    pub async fn run(&self) -> io::Result<Option<PathBuf>> {
        let keys = load_key_file(&self.config.batch.keys_file);
        if keys.is_empty() {
            return Ok(None);
        }

        let total = keys.len();
        tracing::info!(
            wallets = total,
            contract = %self.target.address,
            "Starting mint batch"
        );

        let executor = MintExecutor::new(self.client.clone(), self.target.clone());
        let mut results = Vec::with_capacity(total);

        for (i, key) in keys.iter().enumerate() {
            let index = i + 1;
            tracing::info!(wallet = index, total, "Processing wallet");

            let attempt = executor.execute(key).await;
            if attempt.success {
                tracing::info!(
                    wallet = index,
                    tx_hash = attempt.tx_hash.as_deref().unwrap_or("-"),
                    "Mint succeeded"
                );
            } else {
                tracing::warn!(wallet = index, reason = %attempt.message, "Mint failed");
            }

            results.push(MintOutcome {
                wallet_index: index,
                success: attempt.success,
                message: attempt.message,
                tx_hash: attempt.tx_hash,
            });

            // Pace between wallets, not after the last one.
            if index < total {
                let delay = pacing_delay(&self.config.batch);
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Pacing before next wallet");
                tokio::time::sleep(delay).await;
            }
        }

        let report = BatchReport::build(&self.config.contract.address, results);
        let path = report.write(&self.config.batch.report_dir)?;

        tracing::info!(
            total = report.total_count,
            succeeded = report.success_count,
            failed = report.failure_count,
            success_rate = %report.success_rate,
            report = %path.display(),
            "Batch finished"
        );

        Ok(Some(path))
    }
}

/// Sample the inter-wallet delay uniformly from the configured window.
fn pacing_delay(config: &BatchConfig) -> Duration {
    let ms = rand::thread_rng().gen_range(config.delay_min_ms..config.delay_max_ms);
    Duration::from_millis(ms)
}
