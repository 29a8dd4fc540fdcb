//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::MintConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MintConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MintConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("mint-runner-loader-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_config() {
        let dir = scratch_dir("valid");
        let path = dir.join("mint.toml");
        fs::write(
            &path,
            r#"
            [rpc]
            url = "https://rpc.sepolia.org"
            chain_id = 11155111

            [batch]
            delay_min_ms = 1000
            delay_max_ms = 1500
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.rpc.chain_id, 11_155_111);
        assert_eq!(config.batch.delay_min_ms, 1_000);
        // Untouched sections keep their defaults
        assert_eq!(config.contract.gas_limit, 300_000);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/definitely/not/here/mint.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_broken_toml_is_parse_error() {
        let dir = scratch_dir("broken");
        let path = dir.join("mint.toml");
        fs::write(&path, "rpc = [").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_semantic_errors_are_reported() {
        let dir = scratch_dir("semantic");
        let path = dir.join("mint.toml");
        fs::write(
            &path,
            r#"
            [contract]
            address = "not-an-address"
            "#,
        )
        .unwrap();

        let result = load_config(&path);
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.field == "contract.address"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }

        fs::remove_dir_all(&dir).ok();
    }
}
