//! Configuration management for the lookup tool
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::LookupError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database file looked up when none is given on the command line
pub const DEFAULT_DATABASE: &str = "HyperionDev.db";

/// Widest JSON indent accepted for exports
pub const MAX_JSON_INDENT: usize = 8;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// SQLite database file, opened read-only
    pub database_path: PathBuf,
    /// Export configuration
    pub export: ExportConfig,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Spaces per nesting level in JSON exports
    pub json_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            database_path: PathBuf::from(DEFAULT_DATABASE),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { json_indent: 2 }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, LookupError> {
        let config = Self {
            debug: args.debug,
            database_path: args.database.clone(),
            export: ExportConfig {
                json_indent: args.json_indent,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LookupError> {
        if !self.database_path.is_file() {
            return Err(LookupError::validation(format!(
                "Database file not found: {}. Please store your database as {}",
                self.database_path.display(),
                self.database_path.display()
            )));
        }

        if self.export.json_indent > MAX_JSON_INDENT {
            return Err(LookupError::config(format!(
                "JSON indent must be at most {MAX_JSON_INDENT}, got {}",
                self.export.json_indent
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from("HyperionDev.db"));
        assert_eq!(config.export.json_indent, 2);
        assert!(!config.debug);
    }

    #[test]
    fn test_from_args_with_existing_database() {
        let db = NamedTempFile::new().unwrap();
        let path = db.path().to_str().unwrap();
        let args = Args::try_parse_from(["lookup", "--database", path, "--debug"]).unwrap();

        let config = Config::from_args(&args).unwrap();
        assert!(config.debug);
        assert_eq!(config.database_path, db.path());
    }

    #[test]
    fn test_missing_database_is_rejected() {
        let config = Config {
            database_path: PathBuf::from("/definitely/not/here.db"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Database file not found"));
    }

    #[test]
    fn test_oversized_indent_is_rejected() {
        let db = NamedTempFile::new().unwrap();
        let config = Config {
            database_path: db.path().to_path_buf(),
            export: ExportConfig { json_indent: 12 },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LookupError::Config { .. })
        ));
    }
}
