//! Calculator configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a TOML
//! document. Every field has a default, so an empty document is valid:
//!
//! ```toml
//! [engine]
//! history_capacity = 50
//! max_entry_len = 18
//! tax_rate = 0.10
//!
//! [logging]
//! default = "warn"
//! ```
//!
//! Validation collects every out-of-range setting in one pass rather than
//! stopping at the first.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, SettingViolation};

/// Smallest accepted entry length guard.
pub const MIN_ENTRY_LEN: usize = 2;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_max_entry_len() -> usize {
    18
}

fn default_tax_rate() -> f64 {
    0.10
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine behaviour settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of history entries retained
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Entry text longer than this switches to exponential notation
    #[serde(default = "default_max_entry_len")]
    pub max_entry_len: usize,

    /// Rate used by the tax-plus and tax-minus functions
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            max_entry_len: default_max_entry_len(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Log filter settings for [`crate::logging::init`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"warn"` or `"warn,deskcalc=debug"`
    #[serde(default = "default_log_filter")]
    pub default: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_filter(),
        }
    }
}

/// Outcome of validating one setting.
pub type SettingCheck = Validation<(), NonEmptyVec<SettingViolation>>;

fn check(ok: bool, violation: SettingViolation) -> SettingCheck {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

impl EngineConfig {
    /// Validate all engine settings, accumulating every violation.
    pub fn checks(&self) -> Vec<SettingCheck> {
        vec![
            check(
                self.history_capacity >= 1,
                SettingViolation::HistoryCapacity(self.history_capacity),
            ),
            check(
                self.max_entry_len >= MIN_ENTRY_LEN,
                SettingViolation::MaxEntryLen {
                    min: MIN_ENTRY_LEN,
                    found: self.max_entry_len,
                },
            ),
            check(
                self.tax_rate.is_finite() && self.tax_rate > -1.0,
                SettingViolation::TaxRate(self.tax_rate),
            ),
        ]
    }

    /// Validate, returning the settings unchanged on success.
    pub fn validated(self) -> Result<Self, ConfigError> {
        into_result(self.checks()).map(|_| self)
    }
}

impl CalculatorConfig {
    /// Parse a TOML document and validate it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::config::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::from_toml_str("[engine]\nhistory_capacity = 10\n").unwrap();
    /// assert_eq!(config.engine.history_capacity, 10);
    /// assert_eq!(config.engine.max_entry_len, 18);
    /// assert_eq!(config.logging.default, "warn");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every setting, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks = self.engine.checks();
        checks.push(check(
            !self.logging.default.trim().is_empty(),
            SettingViolation::EmptyLogFilter,
        ));
        into_result(checks)
    }
}

fn into_result(checks: Vec<SettingCheck>) -> Result<(), ConfigError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => Err(ConfigError::Invalid(
            violations.iter().map(|v| v.to_string()).collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.history_capacity, 50);
        assert_eq!(config.engine.max_entry_len, 18);
        assert_eq!(config.engine.tax_rate, 0.10);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn document_overrides_fields() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [engine]
            tax_rate = 0.2
            max_entry_len = 12

            [logging]
            default = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.tax_rate, 0.2);
        assert_eq!(config.engine.max_entry_len, 12);
        assert_eq!(config.engine.history_capacity, 50);
        assert_eq!(config.logging.default, "debug");
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CalculatorConfig {
            engine: EngineConfig {
                history_capacity: 0,
                max_entry_len: 1,
                tax_rate: f64::NAN,
            },
            logging: LoggingConfig {
                default: "  ".to_string(),
            },
        };

        match config.validate() {
            Err(ConfigError::Invalid(messages)) => {
                assert_eq!(messages.len(), 4);
                assert!(messages.iter().any(|m| m.contains("history_capacity")));
                assert!(messages.iter().any(|m| m.contains("max_entry_len")));
                assert!(messages.iter().any(|m| m.contains("tax_rate")));
                assert!(messages.iter().any(|m| m.contains("logging filter")));
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn invalid_document_is_rejected() {
        let result = CalculatorConfig::from_toml_str("[engine]\ntax_rate = -1.5\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = CalculatorConfig::from_toml_str("[engine]\nhistory_capacity = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn engine_config_validated_passes_through() {
        let engine = EngineConfig {
            history_capacity: 5,
            ..EngineConfig::default()
        };
        assert_eq!(engine.clone().validated().unwrap(), engine);
    }

    #[test]
    fn missing_file_reports_path() {
        let result = CalculatorConfig::load("/nonexistent/deskcalc.toml");
        match result {
            Err(ConfigError::Io { path, .. }) => {
                assert!(path.ends_with("deskcalc.toml"));
            }
            other => panic!("Expected io error, got {other:?}"),
        }
    }
}
