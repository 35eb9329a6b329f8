//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::HolidayRule;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, HolidayConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Rule set metadata (required)
/// └── holidays.yaml  # Weekly holiday rule (optional)
/// ```
///
/// When `holidays.yaml` is absent the default rule applies: every Sunday
/// plus the 2nd and 4th Saturday of the month.
///
/// # Example
///
/// ```no_run
/// use attendance_grid_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded rules: {} ({})", loader.metadata().name, loader.holiday_rule());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `engine.yaml` is missing
    /// - [`EngineError::ConfigParseError`] if any present file is invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidayConfig>(&holidays_path)?
        } else {
            HolidayConfig::default()
        };

        info!(
            path = %path.display(),
            version = %metadata.version,
            holiday_rule = %holidays.rule,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, holidays),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the configured weekly holiday rule.
    pub fn holiday_rule(&self) -> HolidayRule {
        self.config.holidays().rule
    }
}
