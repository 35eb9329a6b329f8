//! Validation of raw attendance and leave records.
//!
//! Records from the attendance and leave sources are untrusted. Each one is
//! validated independently; a bad record is logged and skipped so it cannot
//! prevent the rest of the month from being classified.

use tracing::warn;

use crate::models::{DayRecord, LeaveInterval, RawDayRecord, RawLeaveInterval};

/// The usable records from a batch, plus how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecords<T> {
    /// Records that passed validation, in input order.
    pub records: Vec<T>,
    /// Number of records that failed validation.
    pub skipped: usize,
}

impl<T> Default for ValidatedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Validates raw attendance records, skipping malformed ones.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::validate_attendance_records;
/// use attendance_grid_engine::models::RawDayRecord;
///
/// let raw = vec![
///     RawDayRecord {
///         date: Some("2025-06-02".into()),
///         status: Some("P".into()),
///         ..Default::default()
///     },
///     RawDayRecord { date: None, status: Some("P".into()), ..Default::default() },
/// ];
///
/// let validated = validate_attendance_records(raw);
/// assert_eq!(validated.records.len(), 1);
/// assert_eq!(validated.skipped, 1);
/// ```
pub fn validate_attendance_records<I>(raw_records: I) -> ValidatedRecords<DayRecord>
where
    I: IntoIterator<Item = RawDayRecord>,
{
    let mut validated = ValidatedRecords::default();

    for (index, raw) in raw_records.into_iter().enumerate() {
        match DayRecord::try_from(raw) {
            Ok(record) => validated.records.push(record),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed attendance record");
                validated.skipped += 1;
            }
        }
    }

    validated
}

/// Validates raw leave intervals, skipping malformed ones.
///
/// Intervals whose end precedes their start are kept: they parse fine and
/// simply cover no days.
pub fn validate_leave_intervals<I>(raw_intervals: I) -> ValidatedRecords<LeaveInterval>
where
    I: IntoIterator<Item = RawLeaveInterval>,
{
    let mut validated = ValidatedRecords::default();

    for (index, raw) in raw_intervals.into_iter().enumerate() {
        match LeaveInterval::try_from(raw) {
            Ok(interval) => {
                if interval.is_malformed() {
                    warn!(
                        index,
                        start_date = %interval.start_date,
                        end_date = %interval.end_date,
                        "Leave interval ends before it starts; it covers no days"
                    );
                }
                validated.records.push(interval);
            }
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed leave interval");
                validated.skipped += 1;
            }
        }
    }

    validated
}
