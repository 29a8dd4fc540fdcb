//! Blockchain access subsystem.
//!
//! # Data Flow
//! ```text
//! private_keys.txt
//!     → keys.rs (line filtering, hex validation)
//!     → wallet.rs (key parsing, address derivation, signing)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (build, sign, broadcast, receipt poll)
//! ```
//!
//! # Security Constraints
//! - Private keys never appear in logs or reports
//! - All RPC calls have a configurable timeout
//! - Network failures surface as error values, never panics

pub mod client;
pub mod keys;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use types::{BlockchainError, BlockchainResult};
pub use wallet::Wallet;
