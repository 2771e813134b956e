//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more settings are out of range
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A single out-of-range setting found during validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingViolation {
    #[error("history_capacity must be at least 1 (got {0})")]
    HistoryCapacity(usize),

    #[error("max_entry_len must be at least {min} (got {found})")]
    MaxEntryLen { min: usize, found: usize },

    #[error("tax_rate must be finite and greater than -1 (got {0})")]
    TaxRate(f64),

    #[error("logging filter must not be empty")]
    EmptyLogFilter,
}
