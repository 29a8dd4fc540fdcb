//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the mint target parses (address, call data)
//! - Validate value ranges (gas limit, delay window, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MintConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::{Address, Bytes};

use crate::config::schema::MintConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `contract.address`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &MintConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rpc.url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::new(
            "rpc.url",
            format!("'{}' is not a valid URL", config.rpc.url),
        ));
    }
    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.timeout_secs", "must be greater than zero"));
    }
    if config.rpc.confirm_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "rpc.confirm_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::new(
            "contract.address",
            format!("'{}' is not a valid address", config.contract.address),
        ));
    }
    if config.contract.calldata.parse::<Bytes>().is_err() {
        errors.push(ValidationError::new(
            "contract.calldata",
            format!("'{}' is not valid hex call data", config.contract.calldata),
        ));
    }
    if config.contract.gas_limit < 21_000 {
        errors.push(ValidationError::new(
            "contract.gas_limit",
            "below the intrinsic transaction cost of 21000",
        ));
    }
    if !config.contract.min_balance_eth.is_finite() || config.contract.min_balance_eth < 0.0 {
        errors.push(ValidationError::new(
            "contract.min_balance_eth",
            "must be a non-negative number",
        ));
    }

    if config.batch.delay_min_ms >= config.batch.delay_max_ms {
        errors.push(ValidationError::new(
            "batch.delay_min_ms",
            "delay window is empty: delay_min_ms must be below delay_max_ms",
        ));
    }
    if config.batch.keys_file.as_os_str().is_empty() {
        errors.push(ValidationError::new("batch.keys_file", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MintConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = MintConfig::default();
        config.contract.address = "nope".to_string();
        config.contract.gas_limit = 1_000;
        config.batch.delay_min_ms = 5_000;
        config.batch.delay_max_ms = 2_000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "contract.address"));
        assert!(errors.iter().any(|e| e.field == "contract.gas_limit"));
        assert!(errors.iter().any(|e| e.field == "batch.delay_min_ms"));
    }

    #[test]
    fn test_calldata_must_be_hex() {
        let mut config = MintConfig::default();
        config.contract.calldata = "0xzz".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "contract.calldata");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new("rpc.url", "bad");
        assert_eq!(err.to_string(), "rpc.url: bad");
    }
}
