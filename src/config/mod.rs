//! Configuration loading and management for the Attendance Grid Engine.
//!
//! This module loads the engine's rule set from YAML files: metadata about
//! the rule set and the weekly holiday rule applied to every grid.
//!
//! # Example
//!
//! ```no_run
//! use attendance_grid_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, HolidayConfig};
