//! Batch mint runner.
//!
//! Submits a fixed contract call ("mint") from every wallet listed in a
//! key file, one wallet at a time, and writes a JSON summary of outcomes.
//!
//! # Data Flow
//!
//! ```text
//! private_keys.txt ──▶ blockchain::keys ──▶ mint::runner ──▶ mint_results_<ms>.json
//!                                               │
//!                                               ▼
//!                           blockchain::{wallet, transaction, client}
//!                                               │
//!                                               ▼
//!                                     JSON-RPC endpoint
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mint_runner::blockchain::BlockchainClient;
use mint_runner::config::loader::load_config;
use mint_runner::mint::BatchRunner;
use mint_runner::MintConfig;

#[derive(Parser, Debug)]
#[command(name = "mint-runner")]
#[command(about = "Submit a fixed mint call from a batch of wallets", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "mint.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mint_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        tracing::info!(
            path = %args.config.display(),
            "Config file not found, using built-in defaults"
        );
        MintConfig::default()
    };

    tracing::info!(
        rpc_url = %config.rpc.url,
        chain_id = config.rpc.chain_id,
        contract = %config.contract.address,
        keys_file = %config.batch.keys_file.display(),
        "Configuration loaded"
    );

    let client = BlockchainClient::new(&config.rpc)?;

    // A failed verification should not stop a batch the operator asked
    // for; per-wallet sends will surface any real connectivity problem.
    match client.verify_chain_id().await {
        Ok(()) => tracing::info!(chain_id = config.rpc.chain_id, "Blockchain client initialized"),
        Err(e) => tracing::warn!(error = %e, "Chain verification failed, continuing"),
    }

    let runner = BatchRunner::new(client, config)?;
    match runner.run().await? {
        Some(path) => tracing::info!(report = %path.display(), "Batch complete"),
        None => tracing::error!(
            "No valid private keys found; add one 64-hex-character key per line to the key file"
        ),
    }

    Ok(())
}
