//! Private key file loading.
//!
//! One key per line, optional `0x` prefix. Blank lines and `#` comments
//! are ignored. A line survives only if it is exactly 64 hex characters
//! after normalization. Keys are returned in file order, undeduplicated.

use std::fs;
use std::path::Path;

/// Length of a hex-encoded 32-byte private key.
const KEY_HEX_LEN: usize = 64;

/// Extract valid private keys from key-file content.
pub fn parse_key_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let hex = line.strip_prefix("0x").unwrap_or(line);
            let valid = hex.len() == KEY_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit());
            valid.then(|| hex.to_string())
        })
        .collect()
}

/// Load private keys from a file.
///
/// A missing or unreadable file is logged and yields an empty list; the
/// caller decides whether an empty batch is fatal.
pub fn load_key_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let keys = parse_key_lines(&content);
            tracing::info!(path = %path.display(), keys = keys.len(), "Loaded private key file");
            keys
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read private key file");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_content_filtering() {
        let content = format!(
            "0x{}\n  \n# comment\n{}\n{}\n",
            "a".repeat(64),
            "b".repeat(63),
            "c".repeat(64)
        );
        let keys = parse_key_lines(&content);
        assert_eq!(keys, vec!["a".repeat(64), "c".repeat(64)]);
    }

    #[test]
    fn test_prefix_stripped_and_order_preserved() {
        let content = format!("0x{}\n{}\n", "1".repeat(64), "2".repeat(64));
        let keys = parse_key_lines(&content);
        assert_eq!(keys[0], "1".repeat(64));
        assert_eq!(keys[1], "2".repeat(64));
    }

    #[test]
    fn test_duplicates_kept() {
        let key = "d".repeat(64);
        let content = format!("{}\n{}\n", key, key);
        assert_eq!(parse_key_lines(&content).len(), 2);
    }

    #[test]
    fn test_non_hex_rejected() {
        let content = format!("{}z\n", "e".repeat(63));
        assert!(parse_key_lines(&content).is_empty());
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let content = format!("{}\n", "A".repeat(64));
        assert_eq!(parse_key_lines(&content), vec!["A".repeat(64)]);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let content = format!("   {}   \n", "f".repeat(64));
        assert_eq!(parse_key_lines(&content), vec!["f".repeat(64)]);
    }

    #[test]
    fn test_missing_file_returns_empty() {
        let keys = load_key_file(Path::new("/no/such/private_keys.txt"));
        assert!(keys.is_empty());
    }
}
