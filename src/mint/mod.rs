//! Mint batch subsystem.
//!
//! # Data Flow
//! ```text
//! key file → runner.rs (sequential loop, random pacing)
//!     → executor.rs (balance gate, submit, classify)
//!     → report.rs (aggregate counters, JSON summary on disk)
//! ```
//!
//! # Design Decisions
//! - One attempt per wallet, no retries
//! - Wallet failures are isolated; the batch always runs to completion
//! - Sends are strictly sequential to avoid nonce contention on one chain

pub mod executor;
pub mod report;
pub mod runner;

pub use executor::{MintExecutor, MintTarget};
pub use report::{BatchReport, MintOutcome};
pub use runner::BatchRunner;
