//! Configuration
//!
//! Environment-driven settings (a `.env` file is honoured), overridable by
//! command-line flags.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const CATALOG_VAR: &str = "CRYPTOBUDDY_CATALOG";
pub const LOG_LEVEL_VAR: &str = "CRYPTOBUDDY_LOG_LEVEL";
pub const BOT_NAME_VAR: &str = "CRYPTOBUDDY_BOT_NAME";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is set but empty")]
    Empty { key: &'static str },

    #[error("catalog file does not exist: {0}")]
    MissingCatalog(PathBuf),
}

/// Top-level configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog to load; the built-in reference catalog when `None`
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub bot_name: String,
}

impl AppConfig {
    /// Load `.env`, then read the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
                Some(value) => Ok(Some(value.trim().to_string())),
                None => Ok(None),
            }
        };

        Ok(Self {
            catalog_path: non_empty(CATALOG_VAR)?.map(PathBuf::from),
            log_level: non_empty(LOG_LEVEL_VAR)?.unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            bot_name: non_empty(BOT_NAME_VAR)?
                .unwrap_or_else(|| crypto_advisor::compose::DEFAULT_BOT_NAME.into()),
        })
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(path) = catalog {
            self.catalog_path = Some(path);
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Check settings that refer to the filesystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.catalog_path {
            Some(path) if !path.is_file() => Err(ConfigError::MissingCatalog(path.clone())),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.bot_name, "CryptoBuddy");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            (CATALOG_VAR, "coins.json"),
            (LOG_LEVEL_VAR, " debug "),
            (BOT_NAME_VAR, "Satoshi"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("coins.json")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bot_name, "Satoshi");
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(BOT_NAME_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { key: BOT_NAME_VAR });
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "info")]))
            .unwrap()
            .with_overrides(Some(PathBuf::from("other.json")), Some("trace".into()));
        assert_eq!(config.catalog_path, Some(PathBuf::from("other.json")));
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = AppConfig::from_lookup(lookup(&[(CATALOG_VAR, "/no/such/catalog.json")]))
            .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingCatalog(_))));
    }
}
