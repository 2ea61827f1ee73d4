//! Reporter configuration (.build-summary.toml)
//!
//! Precedence: built-in defaults → config file → CLI flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".build-summary.toml";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Treat a step where nothing succeeded as a failure
    pub fail_no_op: bool,

    /// Log filter passed to the logger (e.g. "info", "debug")
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fail_no_op: false,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load from `path` when it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log_level '{}': must be one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert!(!config.fail_no_op);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ReportConfig::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            fail_no_op = true
            log_level = "debug"
        "#;

        let config = ReportConfig::from_str(toml).unwrap();
        assert!(config.fail_no_op);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_log_level() {
        let err = ReportConfig::from_str(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ReportConfig::from_str("fail_no_op = maybe").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "fail_no_op = true").unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert!(config.fail_no_op);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ReportConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
