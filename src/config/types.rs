//! Configuration types for the attendance grid engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::HolidayRule;

/// Metadata describing the loaded rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Holiday configuration from holidays.yaml.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct HolidayConfig {
    /// The weekly holiday rule applied to every grid.
    #[serde(default)]
    pub rule: HolidayRule,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Rule set metadata.
    metadata: EngineMetadata,
    /// Holiday configuration.
    holidays: HolidayConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, holidays: HolidayConfig) -> Self {
        Self { metadata, holidays }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the holiday configuration.
    pub fn holidays(&self) -> &HolidayConfig {
        &self.holidays
    }
}
