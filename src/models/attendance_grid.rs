//! Monthly attendance grid models.
//!
//! This module contains the [`MonthlyAttendanceGrid`] produced by the grid
//! calculator and the per-day [`DayClassification`] entries it is made of.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The payable classification of a single calendar day.
///
/// Exactly one status is assigned per day. `Present` and `Leave` are
/// payable; `Holiday` and `Absent` are not.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::models::DayStatus;
///
/// assert!(DayStatus::Leave.is_payable());
/// assert!(!DayStatus::Holiday.is_payable());
/// assert_eq!(DayStatus::Present.code(), 'P');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    /// Attendance was recorded as present.
    Present,
    /// No qualifying attendance or leave.
    Absent,
    /// Covered by approved leave.
    Leave,
    /// Sunday or a holiday Saturday.
    Holiday,
}

impl DayStatus {
    /// Returns true if the day counts towards payable days.
    pub fn is_payable(self) -> bool {
        matches!(self, DayStatus::Present | DayStatus::Leave)
    }

    /// Single-letter code used by attendance tables.
    pub fn code(self) -> char {
        match self {
            DayStatus::Present => 'P',
            DayStatus::Absent => 'A',
            DayStatus::Leave => 'L',
            DayStatus::Holiday => 'H',
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::Leave => write!(f, "Leave"),
            DayStatus::Holiday => write!(f, "Holiday"),
        }
    }
}

/// The classification of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The calendar date.
    pub date: NaiveDate,
    /// 1-based day of the month.
    pub day_index: u32,
    /// The assigned status.
    pub status: DayStatus,
}

/// The day-by-day payable grid for one employee and one month.
///
/// `days` holds one entry per calendar day, ordered by `day_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendanceGrid {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// One classification per day of the month.
    pub days: Vec<DayClassification>,
    /// Number of `Present` plus `Leave` days.
    pub total_payable: u32,
}

impl MonthlyAttendanceGrid {
    /// Builds a grid from its days, deriving the payable total.
    pub fn new(year: i32, month: u32, days: Vec<DayClassification>) -> Self {
        let total_payable = days.iter().filter(|d| d.status.is_payable()).count() as u32;
        Self {
            year,
            month,
            days,
            total_payable,
        }
    }

    /// Number of days in the grid's month.
    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Returns the status assigned to a date, if it falls in this month.
    pub fn status_on(&self, date: NaiveDate) -> Option<DayStatus> {
        self.days.iter().find(|d| d.date == date).map(|d| d.status)
    }

    /// Counts the days with a given status.
    pub fn count(&self, status: DayStatus) -> u32 {
        self.days.iter().filter(|d| d.status == status).count() as u32
    }

    /// Number of `Present` days.
    pub fn present_days(&self) -> u32 {
        self.count(DayStatus::Present)
    }

    /// Number of `Leave` days.
    pub fn leave_days(&self) -> u32 {
        self.count(DayStatus::Leave)
    }

    /// Number of `Holiday` days.
    pub fn holiday_days(&self) -> u32 {
        self.count(DayStatus::Holiday)
    }

    /// Number of `Absent` days.
    pub fn absent_days(&self) -> u32 {
        self.count(DayStatus::Absent)
    }
}
