//! Error types for the Attendance Grid Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building attendance grids.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Attendance Grid Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested month is outside 1-12.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The month that was requested.
        month: i64,
    },

    /// The requested year is not a positive year the calendar can represent.
    #[error("Invalid year: {year}")]
    InvalidYear {
        /// The year that was requested.
        year: i32,
    },

    /// An attendance or leave record could not be validated.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A salary amount could not be prorated.
    #[error("Invalid salary {amount}: {message}")]
    InvalidSalary {
        /// The salary that was supplied.
        amount: Decimal,
        /// A description of what made the salary invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
