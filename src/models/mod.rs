//! Core data models for the Attendance Grid Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_grid;
mod day_record;
mod leave_interval;

pub use attendance_grid::{DayClassification, DayStatus, MonthlyAttendanceGrid};
pub use day_record::{AttendanceStatus, DayRecord, RawDayRecord};
pub use leave_interval::{LeaveInterval, LeaveStatus, RawLeaveInterval};
