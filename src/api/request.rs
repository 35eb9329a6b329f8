//! Request types for the Attendance Grid Engine API.
//!
//! This module defines the JSON request structure for the `/attendance-grid`
//! endpoint and its conversion into validated domain records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::calculation::{ValidatedRecords, validate_attendance_records, validate_leave_intervals};
use crate::models::{DayRecord, LeaveInterval, RawDayRecord, RawLeaveInterval};

/// Request body for the `/attendance-grid` endpoint.
///
/// Records are kept as raw JSON values so that one record of the wrong
/// shape is skipped instead of rejecting the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRequest {
    /// Identifier of the employee, echoed back in the response.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The calendar year.
    pub year: i32,
    /// The month, 1-12. Out-of-range values (including negatives) are
    /// reported as `INVALID_MONTH` rather than a JSON error.
    pub month: i64,
    /// Monthly salary to prorate by payable days.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Attendance records for the employee.
    #[serde(default)]
    pub attendance_records: Vec<Value>,
    /// Leave intervals for the employee.
    #[serde(default)]
    pub leave_intervals: Vec<Value>,
}

/// Validated records extracted from a [`GridRequest`].
#[derive(Debug, Clone, Default)]
pub struct GridInputs {
    /// Usable attendance records.
    pub attendance: Vec<DayRecord>,
    /// Usable leave intervals.
    pub leave: Vec<LeaveInterval>,
    /// Number of records of either kind that were skipped.
    pub skipped: usize,
}

impl GridRequest {
    /// Validates the request's records, skipping malformed entries.
    pub fn validated_inputs(&self) -> GridInputs {
        let (raw_attendance, attendance_shape_errors) =
            decode_records::<RawDayRecord>(&self.attendance_records, "attendance record");
        let (raw_leave, leave_shape_errors) =
            decode_records::<RawLeaveInterval>(&self.leave_intervals, "leave interval");

        let attendance: ValidatedRecords<DayRecord> = validate_attendance_records(raw_attendance);
        let leave: ValidatedRecords<LeaveInterval> = validate_leave_intervals(raw_leave);

        GridInputs {
            skipped: attendance_shape_errors
                + leave_shape_errors
                + attendance.skipped
                + leave.skipped,
            attendance: attendance.records,
            leave: leave.records,
        }
    }
}

/// Decodes each JSON value independently, counting the ones of the wrong shape.
fn decode_records<T: serde::de::DeserializeOwned>(values: &[Value], kind: &str) -> (Vec<T>, usize) {
    let mut decoded = Vec::with_capacity(values.len());
    let mut failures = 0;

    for (index, value) in values.iter().enumerate() {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(record) => decoded.push(record),
            Err(err) => {
                warn!(index, kind, error = %err, "Skipping record with unexpected shape");
                failures += 1;
            }
        }
    }

    (decoded, failures)
}
