//! # Configuration File Parser
//!
//! Reads and parses `agroseed.toml`, the optional configuration file that
//! customizes a run without CLI flags. CLI flags override the environment,
//! which overrides this file.
//!
//! Example `agroseed.toml`:
//!
//! ```toml
//! [database]
//! url = "sqlite://farm.db"
//!
//! [generate]
//! rows = 200
//! seed = 42
//!
//! [tables.crop_plants]
//! rows = 500
//!
//! [tables.inspections]
//! rows = 300
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AgroSeedError, Result};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "agroseed.toml";

/// Top-level agroseed.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgroSeedConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Default generation settings.
    pub generate: GenerateConfig,
    /// Per-table overrides, keyed by table name.
    pub tables: BTreeMap<String, TableConfig>,
}

/// Database connection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://farm.db").
    pub url: Option<String>,
}

/// Default generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Default number of rows per generated table.
    pub rows: Option<usize>,
    /// Fixed random seed for a reproducible run.
    pub seed: Option<u64>,
}

/// Per-table configuration override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of rows to generate for this table.
    pub rows: Option<usize>,
}

impl AgroSeedConfig {
    /// Row count for `table`, falling back to the global default.
    pub fn rows_for(&self, table: &str) -> Option<usize> {
        self.tables
            .get(table)
            .and_then(|t| t.rows)
            .or(self.generate.rows)
    }
}

/// Read and parse an agroseed.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<AgroSeedConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| AgroSeedError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: AgroSeedConfig = toml::from_str(&content).map_err(|e| AgroSeedError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [database]
            url = "sqlite://farm.db"

            [generate]
            rows = 200
            seed = 42

            [tables.crop_plants]
            rows = 500
        "#;
        let config: AgroSeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database.url.as_deref(), Some("sqlite://farm.db"));
        assert_eq!(config.generate.seed, Some(42));
        assert_eq!(config.rows_for("crop_plants"), Some(500));
        assert_eq!(config.rows_for("inspections"), Some(200));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: AgroSeedConfig = toml::from_str("").unwrap();
        assert!(config.database.url.is_none());
        assert_eq!(config.rows_for("crops"), None);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[database\nurl=").unwrap();
        assert!(read_config(dir.path()).is_err());
    }
}
