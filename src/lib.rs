//! Attendance Grid Engine
//!
//! This crate classifies every day of a month for one employee as present,
//! absent, on leave, or a weekly holiday, and derives the payable-day total
//! used by payroll.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
