//! Batch mint automation over an EVM JSON-RPC endpoint.
//!
//! Reads private keys from a file, checks native balances, submits one
//! fixed contract call per wallet in strict sequence, and writes a JSON
//! summary of outcomes.

pub mod blockchain;
pub mod config;
pub mod mint;

pub use blockchain::BlockchainClient;
pub use config::schema::MintConfig;
pub use mint::BatchRunner;
