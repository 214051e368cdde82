//! Vouch CLI configuration
//!
//! A small optional TOML file (`--config vouch.toml`) supplies default key
//! file locations; command-line arguments always take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the Vouch CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default private key path for `new`, `sign`, and `certify`
    pub private_key_path: PathBuf,

    /// Default public key path for `new` and `verify`
    pub public_key_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from("./private_key"),
            public_key_path: PathBuf::from("./public_key"),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_the_working_directory() {
        let config = CliConfig::default();
        assert_eq!(config.private_key_path, PathBuf::from("./private_key"));
        assert_eq!(config.public_key_path, PathBuf::from("./public_key"));
    }

    #[test]
    fn loads_partial_files_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "private_key_path = \"/tmp/identity.key\"").unwrap();

        let config = CliConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.private_key_path, PathBuf::from("/tmp/identity.key"));
        assert_eq!(config.public_key_path, PathBuf::from("./public_key"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "private_key_path = [").unwrap();
        assert!(CliConfig::load_from_file(file.path()).is_err());
    }
}
