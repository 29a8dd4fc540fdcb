//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MintConfig (validated, immutable)
//!     → handed to client / runner at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a batch never reconfigures mid-run
//! - All fields have defaults, so a missing config file is still runnable
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BatchConfig;
pub use schema::ContractConfig;
pub use schema::MintConfig;
pub use schema::RpcConfig;
