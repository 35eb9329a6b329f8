//! Leave interval models.
//!
//! This module contains the validated [`LeaveInterval`] and its loose
//! [`RawLeaveInterval`] counterpart from the leave source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_record::required_date;
use crate::error::EngineError;

/// Approval status of a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    /// The leave has been approved and counts towards payable days.
    Approved,
    /// Any other status (`Pending`, `Rejected`, ...), kept as received.
    Other(String),
}

impl From<&str> for LeaveStatus {
    fn from(value: &str) -> Self {
        match value {
            "Approved" => LeaveStatus::Approved,
            other => LeaveStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for LeaveStatus {
    fn from(value: String) -> Self {
        if value == "Approved" {
            LeaveStatus::Approved
        } else {
            LeaveStatus::Other(value)
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        match status {
            LeaveStatus::Approved => "Approved".to_string(),
            LeaveStatus::Other(other) => other,
        }
    }
}

/// An inclusive range of leave days for one employee.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
///
/// let leave = LeaveInterval::new(
///     NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
///     "Approved",
/// );
///
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()));  // start date
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap())); // end date
/// assert!(!leave.covers(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval status.
    pub status: LeaveStatus,
    /// The kind of leave (e.g. "Casual", "Sick"), informational only.
    #[serde(default)]
    pub leave_type: Option<String>,
}

impl LeaveInterval {
    /// Creates a leave interval without a leave type.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, status: impl Into<LeaveStatus>) -> Self {
        Self {
            start_date,
            end_date,
            status: status.into(),
            leave_type: None,
        }
    }

    /// Returns true if the leave has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the end date precedes the start date.
    pub fn is_malformed(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Checks if the interval covers a date, inclusive of both ends.
    ///
    /// A malformed interval covers no dates.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A leave interval as delivered by the leave source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLeaveInterval {
    /// First day of leave.
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    /// Last day of leave.
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    /// Approval status string.
    #[serde(default)]
    pub status: Option<String>,
    /// The kind of leave.
    #[serde(default, alias = "leaveType")]
    pub leave_type: Option<String>,
}

impl TryFrom<RawLeaveInterval> for LeaveInterval {
    type Error = EngineError;

    fn try_from(raw: RawLeaveInterval) -> Result<Self, Self::Error> {
        let start_date = required_date("start_date", raw.start_date.as_deref())?;
        let end_date = required_date("end_date", raw.end_date.as_deref())?;
        let status = raw.status.ok_or_else(|| EngineError::InvalidRecord {
            field: "status".to_string(),
            message: "missing".to_string(),
        })?;

        Ok(LeaveInterval {
            start_date,
            end_date,
            status: LeaveStatus::from(status),
            leave_type: raw.leave_type,
        })
    }
}
